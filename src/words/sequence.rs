// ============================================================================
// Word Sequence
// Ordered token list joined by single spaces on output
// ============================================================================

use smallvec::SmallVec;
use std::fmt;

/// Spelled-out words for one conversion.
///
/// Tokens are static vocabulary entries and never empty, so joining them
/// cannot produce doubled or dangling spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSequence(SmallVec<[&'static str; 16]>);

impl WordSequence {
    #[inline]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    #[inline]
    pub fn push(&mut self, word: &'static str) {
        debug_assert!(!word.is_empty(), "empty word token");
        self.0.push(word);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.0.iter();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                f.write_str(" ")?;
                f.write_str(word)?;
            }
        }
        Ok(())
    }
}

impl From<WordSequence> for String {
    fn from(words: WordSequence) -> Self {
        words.to_string()
    }
}

impl IntoIterator for WordSequence {
    type Item = &'static str;
    type IntoIter = smallvec::IntoIter<[&'static str; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a &'static str;
    type IntoIter = std::slice::Iter<'a, &'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_single_spaces() {
        let mut words = WordSequence::new();
        words.push("seratus");
        words.push("dua");
        words.push("puluh");
        assert_eq!(words.to_string(), "seratus dua puluh");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_empty_sequence() {
        let words = WordSequence::new();
        assert!(words.is_empty());
        assert_eq!(words.to_string(), "");
    }

    #[test]
    fn test_into_iter() {
        let mut words = WordSequence::new();
        words.push("satu");
        words.push("juta");
        let collected: Vec<&str> = words.into_iter().collect();
        assert_eq!(collected, vec!["satu", "juta"]);
    }
}
