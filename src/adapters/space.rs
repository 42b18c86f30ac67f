//! Single-space word manipulator
//!
//! Implements `WordManipulator` by splitting on the literal space
//! character (U+0020). Splitting is not whitespace-aware: consecutive
//! spaces produce empty tokens, which survive the reversal, and tabs or
//! other whitespace stay inside their token. Reversing twice therefore
//! returns the original string.

use crate::core::ports::WordManipulator;

/// Word manipulator that splits on single spaces
#[derive(Debug, Clone, Copy)]
pub struct SpaceManipulator;

impl SpaceManipulator {
    /// Create a new space manipulator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SpaceManipulator {
    fn default() -> Self {
        Self::new()
    }
}

impl WordManipulator for SpaceManipulator {
    fn reverse_words(&self, input: &str) -> String {
        let mut words: Vec<&str> = input.split(' ').collect();
        words.reverse();
        words.join(" ")
    }
}
