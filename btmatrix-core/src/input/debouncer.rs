//! Window-sampled button debouncing
//!
//! The raw level is sampled once per window. A press that spans at least
//! one window boundary is reported once, either as a short press (released
//! by the next sample) or as a hold (still pressed at the next sample).
//! Presses shorter than a window can be missed entirely.

use crate::config::DEFAULT_DEBOUNCE_WINDOW_MS;

/// Debounced button classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Nothing to report
    #[default]
    Released,
    /// Pressed in the previous window, released now
    Pressed,
    /// Pressed in the previous window and still pressed
    PressedContinuously,
}

/// Button classifier with explicit state
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    window_ms: u32,
    /// Start of the current window, `None` before the first call
    window_start: Option<u32>,
    was_pressed: bool,
    /// An edge was already reported for the current hold
    reported: bool,
}

impl Default for ButtonDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW_MS)
    }
}

impl ButtonDebouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            window_start: None,
            was_pressed: false,
            reported: false,
        }
    }

    /// Classify the raw level sampled at `now_ms`
    pub fn classify(&mut self, raw_pressed: bool, now_ms: u32) -> ButtonState {
        let Some(start) = self.window_start else {
            self.window_start = Some(now_ms);
            return ButtonState::Released;
        };
        if now_ms.wrapping_sub(start) < self.window_ms {
            return ButtonState::Released;
        }
        self.window_start = Some(now_ms);

        let state = match (self.was_pressed, raw_pressed) {
            (true, true) => ButtonState::PressedContinuously,
            (true, false) => ButtonState::Pressed,
            (false, _) => ButtonState::Released,
        };
        self.was_pressed = raw_pressed;

        if state == ButtonState::Released {
            self.reported = false;
            return ButtonState::Released;
        }
        if self.reported {
            return ButtonState::Released;
        }
        self.reported = true;
        state
    }
}
