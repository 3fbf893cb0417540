//! Addressable LED strip abstraction

/// Raw 8-bit RGB triple as sent to the strip
pub type Rgb = (u8, u8, u8);

/// LED strip driver
///
/// Writes go to a staging buffer; nothing is visible until
/// [`PixelDriver::show`] pushes the buffer out to the strip.
pub trait PixelDriver {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Check if the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage one pixel
    ///
    /// Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Stage every pixel with the same color
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.len() {
            self.set_pixel(index, color);
        }
    }

    /// Stage every pixel as off
    fn clear(&mut self) {
        self.fill((0, 0, 0));
    }

    /// Transmit the staged buffer to the strip
    fn show(&mut self);
}
