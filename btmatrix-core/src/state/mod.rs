//! Operating mode state machine
//!
//! The mode decides what the scheduler does on every tick. It is stored in
//! a [`ModeCell`] so the button wake interrupt can update it.

pub mod cell;
pub mod events;
pub mod machine;

pub use cell::ModeCell;
pub use events::ModeEvent;
pub use machine::Mode;
