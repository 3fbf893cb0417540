//! Button as seen from thread mode
//!
//! The pin itself belongs to the button task; this side only reads the
//! level it publishes and registers the wake handler it calls.

use portable_atomic::Ordering;

use btmatrix_hal::{ButtonPin, WakeHandler};

use crate::channels::{BUTTON_PRESSED, WAKE_HANDLER};

pub struct SharedButton;

impl ButtonPin for SharedButton {
    fn is_pressed(&self) -> bool {
        BUTTON_PRESSED.load(Ordering::Relaxed)
    }

    fn attach_wake(&mut self, handler: WakeHandler) {
        WAKE_HANDLER.lock(|slot| slot.set(Some(handler)));
    }

    fn detach_wake(&mut self) {
        WAKE_HANDLER.lock(|slot| slot.set(None));
    }
}
