//! # Utilities Module
//!
//! Shared helpers used by generation and turn resolution.

pub mod random;

pub use random::*;
