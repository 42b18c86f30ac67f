//! Word manipulator port
//!
//! Defines the interface for the per-line text transformation.

/// Capability for reversing the word order of a single line
///
/// Implementations decide what a "word" is; the reference adapter splits
/// strictly on the single-space character.
pub trait WordManipulator: Send + Sync {
    /// Reverse the order of words in `input`
    ///
    /// Total over all strings: every input produces an output, with no
    /// side effects and no failure mode.
    fn reverse_words(&self, input: &str) -> String;
}
