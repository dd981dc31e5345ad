// ============================================================================
// Utilities Module
// Helpers for applications embedding the library
// ============================================================================

mod logging;

pub use logging::init_logging;
