//! Domain models for wordrev
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Bounds`] - The inclusive character-count range a line must satisfy
//!   to be transformed rather than rejected

mod bounds;

pub use bounds::{Bounds, BoundsError};
