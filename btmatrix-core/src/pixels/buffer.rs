//! Per-LED color state
//!
//! `current` is what the strip shows (and what GET_LEDS reports); `target`
//! is only used by the animation.

use btmatrix_hal::PixelDriver;

use super::color::Color;

/// Current and animation target color of `N` LEDs
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    current: [Color; N],
    target: [Color; N],
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    /// All LEDs black
    pub const fn new() -> Self {
        Self {
            current: [Color::BLACK; N],
            target: [Color::BLACK; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.current.get(index).copied()
    }

    /// Set the current color of one LED
    ///
    /// Returns false if `index` is out of range.
    pub fn set(&mut self, index: usize, color: Color) -> bool {
        match self.current.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Set the current color of every LED
    pub fn fill(&mut self, color: Color) {
        self.current.fill(color);
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.fill(Color::BLACK);
    }

    /// Current colors in index order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.current.iter().copied()
    }

    /// Current and target color pairs in index order
    pub fn pairs_mut(&mut self) -> impl Iterator<Item = (&mut Color, &mut Color)> {
        self.current.iter_mut().zip(self.target.iter_mut())
    }

    /// Stage every current color on the driver and flush
    pub fn write_to<D: PixelDriver>(&self, driver: &mut D) {
        for (index, color) in self.current.iter().enumerate() {
            driver.set_pixel(index, (*color).into());
        }
        driver.show();
    }
}
