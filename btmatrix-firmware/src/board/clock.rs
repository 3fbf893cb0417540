use embassy_time::Instant;

use btmatrix_hal::Clock;

/// Milliseconds since the clock was created, wrapping at `u32::MAX`
pub struct UptimeClock {
    start: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}
