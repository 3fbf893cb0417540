//! Board configuration
//!
//! Pin assignments and timing for the Bluetooth LED matrix board: an
//! RP2040 with an HC-05 style Bluetooth serial module on UART0, a 64 LED
//! WS2812 matrix and a single push button to ground.

/// Number of LEDs on the matrix
pub const LED_COUNT: usize = 64;

/// Baud rate of the Bluetooth module's serial link
pub const BLUETOOTH_BAUD_RATE: u32 = 38_400;

/// Time the Bluetooth module needs after power-on
pub const BLUETOOTH_STARTUP_MS: u64 = 1000;

/// Scheduler tick period
pub const TICK_INTERVAL_MS: u64 = 5;

/// Gap after the last byte that still counts as the same frame
///
/// Two character times at 38400 baud 8N1 (about 260 us each).
pub const INTER_BYTE_GAP_US: u64 = 520;

/// UART buffer sizes (RX holds a full SET_LEDS frame for 64 LEDs)
pub const UART_TX_BUF_SIZE: usize = 512;
pub const UART_RX_BUF_SIZE: usize = 512;

// Pin assignments (GPIO numbers, for logging only; the pins themselves are
// taken from the peripherals in main)
pub const BLUETOOTH_TX_PIN: u8 = 0;
pub const BLUETOOTH_RX_PIN: u8 = 1;
pub const BUTTON_PIN: u8 = 2;
pub const LEDS_DATA_PIN: u8 = 11;
