//! Port traits (interfaces) for swappable capabilities
//!
//! These traits define the boundary between the batch processor and the
//! text transformation it drives.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The processor depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Alternative tokenization strategies without touching
//!   validation logic

mod manipulator;

pub use manipulator::WordManipulator;
