//! Low-power control

/// Chip sleep control
pub trait LowPower {
    /// Suspend execution until an interrupt wakes the chip
    ///
    /// Returns once the registered wake handler has run. Spurious wake-ups
    /// from unrelated interrupts are the implementation's business.
    fn sleep_until_interrupt(&mut self);
}
