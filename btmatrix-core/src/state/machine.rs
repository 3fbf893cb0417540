//! Mode definition
//!
//! All LED and power behavior is a function of the current mode.

use super::events::ModeEvent;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// LEDs off, CPU halted until the button is pressed
    Idle = 0,
    /// Random-fade animation running
    #[default]
    Autonomous = 1,
    /// Colors held as last set by the host
    ProtocolControlled = 2,
}

impl Mode {
    /// Decode from the stored byte
    ///
    /// Only values written by [`Mode::as_u8`] are ever stored, so anything
    /// else maps to the power-on mode.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Mode::Idle,
            2 => Mode::ProtocolControlled,
            _ => Mode::Autonomous,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if the animation runs in this mode
    pub fn animates(&self) -> bool {
        matches!(self, Mode::Autonomous)
    }

    /// Check if the device should be asleep
    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: ModeEvent) -> Self {
        use Mode::*;
        use ModeEvent::*;

        match (self, event) {
            (_, ButtonPressed) => Autonomous,
            (_, ButtonHeld) => Idle,
            (_, ProtocolWrite) => ProtocolControlled,
            (Idle, WokeUp) => Autonomous,

            // Default: stay in current mode
            _ => self,
        }
    }
}
