// ============================================================================
// Interfaces Module
// Contains the public conversion trait
// ============================================================================

mod to_terbilang;

pub use to_terbilang::ToTerbilang;
