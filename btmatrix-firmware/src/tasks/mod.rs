//! Embassy async tasks
//!
//! The controller task runs on the thread-mode executor. The button task
//! runs on an interrupt executor so it can still react while the controller
//! has the core halted in WFI.

pub mod button;
pub mod controller;

pub use button::button_task;
pub use controller::{controller_task, Board};
