//! Controller task
//!
//! Runs the mode controller at a fixed tick. Sleeping in idle blocks this
//! task (and the thread-mode executor) until the button wakes it.

use defmt::*;
use embassy_time::{Duration, Ticker};

use btmatrix_core::{ModeController, Peripherals};

use crate::board::{
    BluetoothSerial, SharedButton, UptimeClock, WfiSleep, Ws2812Strip, XorShiftRng,
};
use crate::channels::{wake_on_button, MODE};
use crate::config::{LED_COUNT, TICK_INTERVAL_MS};

/// Concrete peripherals of this board
pub type Board =
    Peripherals<Ws2812Strip, SharedButton, BluetoothSerial, UptimeClock, WfiSleep, XorShiftRng>;

#[embassy_executor::task]
pub async fn controller_task(board: Board) {
    info!("Controller task started");

    let mut controller: ModeController<'static, LED_COUNT, _, _, _, _, _, _> =
        ModeController::new(&MODE, wake_on_button, board);
    controller.begin();

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut last_mode = controller.mode();

    loop {
        ticker.next().await;

        let mode = controller.tick();
        if mode != last_mode {
            info!("Mode {} -> {}", last_mode, mode);
            last_mode = mode;
        }
    }
}
