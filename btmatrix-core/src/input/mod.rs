//! Button input handling

pub mod debouncer;

pub use debouncer::{ButtonDebouncer, ButtonState};
