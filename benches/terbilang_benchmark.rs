// ============================================================================
// Terbilang Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Integer - Magnitude decomposition across group sizes
// 2. Decimal - Floats and positional fraction digits
// 3. String  - Normalizer plus parsing with Indonesian separators
// 4. Currency - Full entry point with prefix and unit
// ============================================================================

use angka_terbilang::numeric::normalize;
use angka_terbilang::prelude::*;
use angka_terbilang::words::integer_words;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Integer Benchmarks
// ============================================================================

fn benchmark_integer_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_words");

    // One value per magnitude group, up to the full i64 range
    for value in [7i64, 123, 15_000, 2_500_000, 1_234_567_890_123, i64::MAX, i64::MIN].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, &value| {
            b.iter(|| black_box(integer_words(black_box(value)).to_string()));
        });
    }

    group.finish();
}

// ============================================================================
// Decimal Benchmarks
// ============================================================================

fn benchmark_decimal_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_words");

    for value in [1.5f64, 1234.56, 0.123456789].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, &value| {
            b.iter(|| black_box(black_box(value).to_terbilang(None)));
        });
    }

    group.finish();
}

// ============================================================================
// String Benchmarks
// ============================================================================

fn benchmark_string_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_parsing");

    for raw in ["15000", "2.500.000", "1.234.567,89", "  12,75\n", "12a3"].iter() {
        group.bench_with_input(BenchmarkId::new("normalize", raw), raw, |b, raw| {
            b.iter(|| black_box(normalize(black_box(raw))));
        });

        group.bench_with_input(BenchmarkId::new("to_terbilang", raw), raw, |b, raw| {
            b.iter(|| black_box(black_box(*raw).to_terbilang(None)));
        });
    }

    group.finish();
}

// ============================================================================
// Currency Benchmarks
// ============================================================================

fn benchmark_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("currency");

    group.bench_function("to_rupiah_prefix", |b| {
        b.iter(|| black_box(black_box(15_000i64).to_rupiah(Some("Rp"))));
    });

    let formatter = TerbilangBuilder::new().prefix("Rp").rupiah().build().unwrap();
    group.bench_function("formatter", |b| {
        b.iter(|| black_box(formatter.format_str(black_box("1.250.000,50"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_integer_words,
    benchmark_decimal_words,
    benchmark_string_parsing,
    benchmark_currency,
);

criterion_main!(benches);
