// ============================================================================
// Angka Terbilang Library
// Spell out numbers in Indonesian, with locale-aware numeric string parsing
// ============================================================================

//! # Angka Terbilang
//!
//! Converts integers, decimals and numeric strings into their spelled-out
//! Indonesian form ("terbilang"), optionally wrapped in a prefix and a
//! currency unit.
//!
//! ## Features
//!
//! - **Full i64 range**, including `i64::MIN`
//! - **Indonesian number notation** for strings (`"1.234.567,89"`), plain
//!   notation accepted too
//! - **Positional decimals**: `0.56` reads "nol koma lima enam"
//! - **Rupiah formatting** with custom prefix and unit
//! - **Total API**: unparseable input yields the sentinel `"tidak valid"`;
//!   `try_terbilang` exposes the structured error instead
//!
//! ## Example
//!
//! ```rust
//! use angka_terbilang::prelude::*;
//!
//! assert_eq!(1000i64.to_terbilang(None), "seribu");
//! assert_eq!(1234.56f64.to_terbilang(None), "seribu dua ratus tiga puluh empat koma lima enam");
//! assert_eq!("2.500.000".to_terbilang(None), "dua juta lima ratus ribu");
//! assert_eq!(15000i64.to_rupiah(Some("Rp")), "Rp lima belas ribu rupiah");
//! assert_eq!("12a3".to_rupiah(None), "tidak valid rupiah");
//!
//! // Reusable formatter from configuration
//! let formatter = TerbilangBuilder::new().prefix("sebesar").rupiah().build().unwrap();
//! assert_eq!(formatter.format_str("1.000,5"), "sebesar seribu koma lima rupiah");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;
pub mod words;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::TerbilangConfig;
    pub use crate::engine::{create_from_config, Terbilang, TerbilangBuilder};
    pub use crate::interfaces::ToTerbilang;
    pub use crate::numeric::{NumericError, NumericResult, NumericValue};
    pub use crate::words::{DEFAULT_CURRENCY_UNIT, INVALID_SENTINEL};
}
