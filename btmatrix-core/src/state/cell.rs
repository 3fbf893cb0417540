//! Mode storage shared with interrupt context
//!
//! The scheduler owns all mode decisions. The only other writer is the
//! button wake handler, which runs in interrupt context and may only
//! switch the mode to [`Mode::Autonomous`].

use portable_atomic::{AtomicU8, Ordering};

use super::events::ModeEvent;
use super::machine::Mode;

/// Atomically readable and writable [`Mode`]
///
/// Usable as a `static`, so a plain `fn()` wake handler can reach it.
pub struct ModeCell(AtomicU8);

impl ModeCell {
    pub const fn new(mode: Mode) -> Self {
        Self(AtomicU8::new(mode.as_u8()))
    }

    pub fn get(&self) -> Mode {
        Mode::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, mode: Mode) {
        self.0.store(mode.as_u8(), Ordering::Release);
    }

    /// Apply a transition and return the new mode
    ///
    /// Load and store are separate; call only from the scheduler.
    pub fn apply(&self, event: ModeEvent) -> Mode {
        let next = self.get().transition(event);
        self.set(next);
        next
    }

    /// Leave idle from interrupt context
    pub fn wake(&self) {
        self.set(Mode::Autonomous);
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl core::fmt::Debug for ModeCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ModeCell").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_cell() {
        static MODE: ModeCell = ModeCell::new(Mode::Idle);
        assert_eq!(MODE.get(), Mode::Idle);
        MODE.wake();
        assert_eq!(MODE.get(), Mode::Autonomous);
    }

    #[test]
    fn test_apply() {
        let cell = ModeCell::default();
        assert_eq!(cell.apply(ModeEvent::ProtocolWrite), Mode::ProtocolControlled);
        assert_eq!(cell.apply(ModeEvent::ButtonHeld), Mode::Idle);
        assert_eq!(cell.get(), Mode::Idle);
    }
}
