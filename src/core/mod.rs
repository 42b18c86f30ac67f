//! Core domain logic for wordrev
//!
//! This module contains pure business logic with no I/O dependencies.
//! The one external capability the batch processor needs is abstracted
//! through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Bounds)
//! - `services/` - Business logic orchestration
//! - `ports/` - Trait definitions for swappable capabilities

pub mod models;
pub mod ports;
pub mod services;
