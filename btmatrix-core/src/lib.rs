//! Board-agnostic control logic for the LED controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Pixel buffer, colors and the random-fade animation
//! - Button debouncing (short press vs. hold)
//! - Operating mode state machine and the interrupt-shared mode cell
//! - Mode controller driving one scheduler tick at a time
//! - Configuration type definitions
//!
//! Hardware is reached only through the `btmatrix-hal` traits.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod controller;
pub mod input;
pub mod pixels;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ControllerConfig;
pub use controller::{ModeController, Peripherals};
pub use input::{ButtonDebouncer, ButtonState};
pub use pixels::{Animator, Color, PixelBuffer};
pub use state::{Mode, ModeCell, ModeEvent};
