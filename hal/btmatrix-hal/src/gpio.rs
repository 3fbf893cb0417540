//! GPIO abstractions
//!
//! The controller only needs one digital input: the mode button. Besides
//! reading its level, the button must be able to wake the chip from low
//! power through an edge interrupt.

/// Function invoked from interrupt context when the wake edge fires
///
/// Handlers must confine themselves to a single atomic store; they run
/// outside the normal tick loop.
pub type WakeHandler = fn();

/// Push button input
///
/// Implementations hide the electrical details (pull-up, active-low wiring)
/// and report the logical pressed state.
pub trait ButtonPin {
    /// Check if the button is physically pressed right now
    fn is_pressed(&self) -> bool;

    /// Register `handler` to run on the press edge (falling edge for an
    /// active-low button)
    ///
    /// Registering again replaces the previous handler.
    fn attach_wake(&mut self, handler: WakeHandler);

    /// Remove the wake handler, if any
    fn detach_wake(&mut self);
}
