//! Configuration type definitions

/// Default minimum time between animation steps
pub const DEFAULT_ANIMATION_INTERVAL_MS: u32 = 50;

/// Default button sampling window
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u32 = 200;

/// Controller timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Animation advances at most once per this many milliseconds
    pub animation_interval_ms: u32,
    /// Button is sampled at most once per this many milliseconds
    pub debounce_window_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            animation_interval_ms: DEFAULT_ANIMATION_INTERVAL_MS,
            debounce_window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
        }
    }
}

impl ControllerConfig {
    /// Override the animation interval
    pub const fn with_animation_interval(mut self, ms: u32) -> Self {
        self.animation_interval_ms = ms;
        self
    }

    /// Override the debounce window
    pub const fn with_debounce_window(mut self, ms: u32) -> Self {
        self.debounce_window_ms = ms;
        self
    }
}
