//! WS2812 matrix driven by PIO0

use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use smart_leds::RGB8;

use btmatrix_hal::{PixelDriver, Rgb};

use crate::config::LED_COUNT;

/// Frame buffer in front of the PIO driver
///
/// `set_pixel`/`fill` only stage colors; `show` pushes the whole frame.
pub struct Ws2812Strip {
    driver: PioWs2812<'static, PIO0, 0, LED_COUNT, Grb>,
    frame: [RGB8; LED_COUNT],
}

impl Ws2812Strip {
    pub fn new(driver: PioWs2812<'static, PIO0, 0, LED_COUNT, Grb>) -> Self {
        Self {
            driver,
            frame: [RGB8::default(); LED_COUNT],
        }
    }
}

impl PixelDriver for Ws2812Strip {
    fn len(&self) -> usize {
        LED_COUNT
    }

    fn set_pixel(&mut self, index: usize, (r, g, b): Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = RGB8::new(r, g, b);
        }
    }

    fn fill(&mut self, (r, g, b): Rgb) {
        self.frame.fill(RGB8::new(r, g, b));
    }

    fn show(&mut self) {
        // DMA transfer of a 64 LED frame takes about 2 ms
        embassy_futures::block_on(self.driver.write(&self.frame));
    }
}
