//! btmatrix Hardware Abstraction Layer
//!
//! This crate defines the capabilities the controller core consumes from the
//! board. A board crate (the RP2040 firmware, or a host-side mock in tests)
//! implements them; the core never touches registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  btmatrix-firmware (board wiring)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  btmatrix-core (mode controller)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  btmatrix-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`display::PixelDriver`] - Addressable LED strip
//! - [`gpio::ButtonPin`] - Push button with a wake-up edge interrupt
//! - [`uart::SerialPort`] - Byte-oriented serial link to the host
//! - [`clock::Clock`] - Monotonic millisecond clock
//! - [`power::LowPower`] - Sleep until an interrupt fires
//! - [`random::RandomSource`] - Entropy for the animation

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod gpio;
pub mod power;
pub mod random;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use display::{PixelDriver, Rgb};
pub use gpio::{ButtonPin, WakeHandler};
pub use power::LowPower;
pub use random::RandomSource;
pub use uart::SerialPort;
