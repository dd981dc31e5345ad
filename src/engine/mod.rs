// ============================================================================
// Engine Module
// Formatter assembling the final output around the spelled-out words
// ============================================================================

mod formatter;

pub mod factory;

pub use factory::{create_from_config, TerbilangBuilder};
pub use formatter::{spell_or_sentinel, Terbilang};

pub(crate) use formatter::compose;
