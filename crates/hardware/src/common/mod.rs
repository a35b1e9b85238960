//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Architectural widths, reset values, and report layout.
//! 2. **Error Handling:** The crate-wide error enum and `Result` alias.

/// Architectural and reporting constants.
pub mod constants;

/// Error types for loading, decoding, and running programs.
pub mod error;

pub use error::{MalformedReason, Result, SimError};
