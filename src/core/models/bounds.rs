//! Validation bounds for input lines
//!
//! A line is only transformed when its character count falls inside the
//! inclusive `[min, max]` range. Lines outside the range are reported in
//! the result sequence, never raised as errors.

use thiserror::Error;

/// Errors that can occur when constructing bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    /// Minimum length is greater than maximum length
    #[error("minimum length {min} exceeds maximum length {max}")]
    Inverted {
        /// The offending minimum
        min: usize,
        /// The offending maximum
        max: usize,
    },
}

/// Inclusive character-count range a line must satisfy to be transformed
///
/// Bounds are explicit configuration: callers construct them once and pass
/// them into the processor, so tests can run with limits other than the
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    /// Default minimum accepted character count
    pub const DEFAULT_MIN: usize = 1;

    /// Default maximum accepted character count
    pub const DEFAULT_MAX: usize = 25;

    /// Create bounds, rejecting an inverted range
    pub const fn new(min: usize, max: usize) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Minimum accepted character count (inclusive)
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Maximum accepted character count (inclusive)
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Check whether a character count falls inside the range
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
