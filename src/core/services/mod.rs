//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`processor`] - Validate and transform a batch of lines

pub mod processor;

pub use processor::{CaseOutcome, CaseResult, process_batch, process_lines};
