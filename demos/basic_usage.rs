// ============================================================================
// Basic Usage Example
// ============================================================================

use angka_terbilang::prelude::*;
use angka_terbilang::utils::init_logging;
use rust_decimal::Decimal;

fn main() {
    // Shows the library's debug events when built with `--features logging`
    init_logging(tracing::Level::DEBUG);

    println!("=== Angka Terbilang Example ===\n");

    println!("Integers:");
    for value in [0i64, 11, 123, 1000, 15_000, 2_500_000, 1_000_000_000_000, -42] {
        println!("  {:>16} -> {}", value, value.to_terbilang(None));
    }

    println!("\nDecimals:");
    for value in [1.5f64, 1234.56, 0.05] {
        println!("  {:>16} -> {}", value, value.to_terbilang(None));
    }
    let amount = Decimal::new(150, 2);
    println!("  {:>16} -> {}", amount, amount.to_terbilang(None));

    println!("\nNumeric strings (Indonesian notation):");
    for raw in ["15000", "1.000,5", "2.500.000", "1.23", "1.234", "abc"] {
        println!("  {:>16} -> {}", raw, raw.to_terbilang(None));
    }

    println!("\nRupiah:");
    println!("  {}", 10_000i64.to_rupiah(None));
    println!("  {}", 15_000i64.to_rupiah(Some("Rp")));
    println!("  {}", "5000".to_rupiah_with(Some("sekitar"), "IDR"));
    println!("  {}", "12a3".to_rupiah(None));

    // Structured error instead of the sentinel
    println!("\n=== Structured Errors ===");
    match "12a3".try_terbilang() {
        Ok(words) => println!("  parsed: {}", words),
        Err(err) => println!("  rejected: {}", err),
    }

    // Reusable formatter from configuration
    println!("\n=== Configured Formatter ===");
    let formatter = match TerbilangBuilder::new().prefix("sebesar").rupiah().build() {
        Ok(formatter) => formatter,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            return;
        },
    };
    for raw in ["1.250.000", "750.000,50"] {
        println!("  {}", formatter.format_str(raw));
    }
}
