//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `space` - Single-space word splitting and reversal

pub mod space;

pub use space::SpaceManipulator;
