//! State shared between the controller and the button task
//!
//! The controller runs in thread mode; the button task runs on the
//! interrupt executor and must only touch these statics.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::AtomicBool;

use btmatrix_core::{Mode, ModeCell};
use btmatrix_hal::WakeHandler;

/// Current operating mode
pub static MODE: ModeCell = ModeCell::new(Mode::Autonomous);

/// Last level seen by the button task (true = pressed)
pub static BUTTON_PRESSED: AtomicBool = AtomicBool::new(false);

/// Handler to call on the next press, attached only while asleep
pub static WAKE_HANDLER: Mutex<CriticalSectionRawMutex, Cell<Option<WakeHandler>>> =
    Mutex::new(Cell::new(None));

/// Wake handler registered with the controller
///
/// Runs in interrupt context; writes nothing but the mode.
pub fn wake_on_button() {
    MODE.wake();
}
