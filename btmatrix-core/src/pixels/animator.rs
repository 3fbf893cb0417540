//! Random-fade animation
//!
//! Every LED drifts one unit per channel per step toward its own random
//! target and picks a new target once it arrives.

use btmatrix_hal::{PixelDriver, RandomSource};

use super::buffer::PixelBuffer;
use super::color::Color;
use crate::config::DEFAULT_ANIMATION_INTERVAL_MS;

/// Rate-limited animation stepper
#[derive(Debug, Clone)]
pub struct Animator {
    interval_ms: u32,
    last_step: Option<u32>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_INTERVAL_MS)
    }
}

impl Animator {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            last_step: None,
        }
    }

    /// Advance the animation if the interval has elapsed
    ///
    /// Writes all pixels and flushes once per step. Returns true if a step
    /// ran.
    pub fn tick<const N: usize, R, D>(
        &mut self,
        now_ms: u32,
        pixels: &mut PixelBuffer<N>,
        rng: &mut R,
        driver: &mut D,
    ) -> bool
    where
        R: RandomSource,
        D: PixelDriver,
    {
        if let Some(last) = self.last_step {
            if now_ms.wrapping_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_step = Some(now_ms);

        Self::step(pixels, rng);
        pixels.write_to(driver);
        true
    }

    /// One animation step without timing or output
    pub fn step<const N: usize, R: RandomSource>(pixels: &mut PixelBuffer<N>, rng: &mut R) {
        for (current, target) in pixels.pairs_mut() {
            if current == target {
                *target = Color::random(rng);
            }
            current.fade_to(*target);
        }
    }
}
