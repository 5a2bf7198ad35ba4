//! Shared primitives: error taxonomy and geometry helpers.

pub mod core;
pub mod error;
