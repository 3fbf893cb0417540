//! Bluetooth LED matrix firmware
//!
//! RP2040 firmware for a 64 LED WS2812 matrix controlled from a phone over
//! a Bluetooth serial module. Without a host it runs a random color fade;
//! a short button press resumes the fade, holding the button turns the
//! matrix off and halts the core until the next press.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use btmatrix_core::Peripherals;

use crate::board::{
    BluetoothSerial, SharedButton, UptimeClock, WfiSleep, Ws2812Strip, XorShiftRng,
};
use crate::channels::MODE;
use crate::config::*;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Runs the button task above thread mode
static BUTTON_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    BUTTON_EXECUTOR.on_interrupt()
}

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_TX_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_RX_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("btmatrix firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Button task first so the published level is valid once the controller runs
    let button = Input::new(p.PIN_2, Pull::Up);
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let button_spawner = BUTTON_EXECUTOR.start(interrupt::SWI_IRQ_1);
    button_spawner.spawn(tasks::button_task(button)).unwrap();
    info!("Button on GPIO{}", BUTTON_PIN);

    // Wait for the Bluetooth module to start up
    Timer::after_millis(BLUETOOTH_STARTUP_MS).await;

    // Setup UART for the Bluetooth module
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = BLUETOOTH_BAUD_RATE;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; UART_TX_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_RX_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!(
        "UART initialized at {} baud (TX GPIO{}, RX GPIO{})",
        BLUETOOTH_BAUD_RATE, BLUETOOTH_TX_PIN, BLUETOOTH_RX_PIN
    );

    // Setup PIO0 for the WS2812 matrix
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_11, &program);

    info!("WS2812 strip initialized: {} LEDs on GPIO{}", LED_COUNT, LEDS_DATA_PIN);

    let board = Peripherals {
        display: Ws2812Strip::new(ws2812),
        button: SharedButton,
        serial: BluetoothSerial::new(rx, tx),
        clock: UptimeClock::new(),
        power: WfiSleep::new(&MODE),
        rng: XorShiftRng::new(Instant::now().as_ticks() as u32),
    };

    spawner.spawn(tasks::controller_task(board)).unwrap();

    info!("All tasks spawned, firmware running");

    // Keep the PIO common block alive; all work happens in the tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
