//! Events that trigger mode transitions

use crate::input::ButtonState;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// Debounced short press (released after being pressed)
    ButtonPressed,
    /// Debounced hold
    ButtonHeld,
    /// Host changed at least one LED color
    ProtocolWrite,
    /// Button edge fired while asleep
    WokeUp,
}

impl ModeEvent {
    /// Map a debounced button classification to an event
    pub fn from_button(state: ButtonState) -> Option<Self> {
        match state {
            ButtonState::Pressed => Some(ModeEvent::ButtonPressed),
            ButtonState::PressedContinuously => Some(ModeEvent::ButtonHeld),
            ButtonState::Released => None,
        }
    }
}
