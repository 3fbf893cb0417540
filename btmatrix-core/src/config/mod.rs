//! Configuration types
//!
//! Timing parameters for the controller. The LED count is a const generic
//! on the buffer and controller rather than a runtime value.

pub mod types;

pub use types::*;
