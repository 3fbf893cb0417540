//! Mode controller coordinating button, animation and protocol
//!
//! The controller is driven by repeated calls to
//! [`ModeController::tick`]. Each tick:
//! - Samples the button and applies press / hold transitions
//! - Sleeps (Idle), animates (Autonomous) or holds colors (ProtocolControlled)
//! - Drains the serial port as one request frame and answers it

pub mod mode_controller;

pub use mode_controller::ModeController;

/// Hardware the controller owns
///
/// Fields are public so board code can build it with struct syntax and
/// tests can inspect the mocks.
pub struct Peripherals<D, B, S, C, P, R> {
    /// LED strip
    pub display: D,
    /// Mode button
    pub button: B,
    /// Serial link to the host
    pub serial: S,
    /// Millisecond clock
    pub clock: C,
    /// Sleep control
    pub power: P,
    /// Animation entropy
    pub rng: R,
}
