//! Line batch processor - validates and transforms input lines
//!
//! This service contains the pure business logic for checking each line of
//! a batch against the configured bounds and reversing the word order of
//! the lines that pass.

use crate::core::models::Bounds;
use crate::core::ports::WordManipulator;

/// Outcome of processing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The line passed validation; holds the reversed text
    Reversed(String),
    /// The line's character count fell outside the bounds
    OutOfBounds {
        /// Measured character count of the rejected line
        length: usize,
        /// Bounds that were in effect
        bounds: Bounds,
    },
}

/// Result for a single input line
///
/// The `Display` form is the labeled result string: `Case {index}:`
/// followed by either the reversed text or the validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    /// 1-based case index, assigned by position in the batch
    pub index: usize,
    /// What happened to the line
    pub outcome: CaseOutcome,
}

impl CaseResult {
    /// Whether the line passed validation
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Reversed(_))
    }
}

impl std::fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reversed(text) => write!(f, "{text}"),
            Self::OutOfBounds { bounds, .. } => write!(
                f,
                "Input length should be between {} and {} characters.",
                bounds.min(),
                bounds.max()
            ),
        }
    }
}

impl std::fmt::Display for CaseResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case {}: {}", self.index, self.outcome)
    }
}

/// Process a batch of lines against the given bounds
///
/// This is pure business logic with no I/O: one result per input line, in
/// input order. A rejected line never reaches the manipulator, and a
/// rejection never aborts the rest of the batch.
///
/// # Arguments
///
/// * `manipulator` - The word-reversal capability applied to valid lines
/// * `bounds` - Character-count range a line must satisfy
/// * `lines` - The input lines, in batch order
#[must_use]
pub fn process_batch(
    manipulator: &dyn WordManipulator,
    bounds: Bounds,
    lines: &[String],
) -> Vec<CaseResult> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let length = line.chars().count();
            let outcome = if bounds.contains(length) {
                CaseOutcome::Reversed(manipulator.reverse_words(line))
            } else {
                CaseOutcome::OutOfBounds { length, bounds }
            };
            CaseResult {
                index: i + 1,
                outcome,
            }
        })
        .collect()
}

/// Process a batch of lines into labeled result strings
///
/// The same pass as [`process_batch`], with each result rendered to its
/// `Case {index}: ...` form.
#[must_use]
pub fn process_lines(
    manipulator: &dyn WordManipulator,
    bounds: Bounds,
    lines: &[String],
) -> Vec<String> {
    process_batch(manipulator, bounds, lines).iter().map(ToString::to_string).collect()
}
