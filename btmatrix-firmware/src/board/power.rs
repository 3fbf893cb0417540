//! Sleep with WFI until the mode leaves idle

use btmatrix_core::ModeCell;
use btmatrix_hal::LowPower;

/// Halts the core until an interrupt has moved the mode out of idle
pub struct WfiSleep {
    mode: &'static ModeCell,
}

impl WfiSleep {
    pub fn new(mode: &'static ModeCell) -> Self {
        Self { mode }
    }
}

impl LowPower for WfiSleep {
    fn sleep_until_interrupt(&mut self) {
        loop {
            // Check and WFI with interrupts masked: an edge that arrives in
            // between stays pending and ends the WFI immediately.
            let idle = cortex_m::interrupt::free(|_| {
                let idle = self.mode.get().is_idle();
                if idle {
                    cortex_m::asm::wfi();
                }
                idle
            });
            if !idle {
                return;
            }
        }
    }
}
