//! Time source

/// Monotonic millisecond clock
///
/// The value wraps after roughly 49 days; consumers compare timestamps with
/// `wrapping_sub`.
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u32;
}
