//! RP2040 implementations of the HAL traits

pub mod button;
pub mod clock;
pub mod power;
pub mod rng;
pub mod serial;
pub mod strip;

pub use button::SharedButton;
pub use clock::UptimeClock;
pub use power::WfiSleep;
pub use rng::XorShiftRng;
pub use serial::BluetoothSerial;
pub use strip::Ws2812Strip;
