// ============================================================================
// Words Module
// Indonesian vocabulary and the number-to-words converter
// ============================================================================

mod converter;
mod sequence;
pub mod vocabulary;

pub use converter::{integer_words, words};
pub use sequence::WordSequence;
pub use vocabulary::{DEFAULT_CURRENCY_UNIT, INVALID_SENTINEL};
