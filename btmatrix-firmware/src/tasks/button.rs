//! Button watch task
//!
//! Publishes the pin level for the debouncer and calls the attached wake
//! handler on every press (falling edge, the button pulls to ground).

use defmt::*;
use embassy_rp::gpio::Input;
use portable_atomic::Ordering;

use crate::channels::{BUTTON_PRESSED, WAKE_HANDLER};

#[embassy_executor::task]
pub async fn button_task(mut pin: Input<'static>) {
    info!("Button task started");

    BUTTON_PRESSED.store(pin.is_low(), Ordering::Relaxed);

    loop {
        pin.wait_for_any_edge().await;
        let pressed = pin.is_low();
        BUTTON_PRESSED.store(pressed, Ordering::Relaxed);

        if pressed {
            if let Some(handler) = WAKE_HANDLER.lock(|slot| slot.get()) {
                trace!("Button edge, waking controller");
                handler();
            }
        }
    }
}
