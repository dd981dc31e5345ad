// ============================================================================
// Domain Module
// Output configuration shared by the formatter and the entry points
// ============================================================================

pub mod config;

pub use config::TerbilangConfig;
