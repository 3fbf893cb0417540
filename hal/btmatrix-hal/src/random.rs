//! Entropy source for the animation

/// Source of random numbers
///
/// Quality requirements are low: the output only picks LED colors.
pub trait RandomSource {
    /// Next random 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Random value in `0..bound`
    ///
    /// `bound` must be non-zero. Uses the modulo method; the bias is
    /// irrelevant for bounds this small.
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }
}
