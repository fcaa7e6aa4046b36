// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delay derived from the core clock.
//!
//! Each axis driver owns its own copy, so the SysTick-based `cortex_m::delay::Delay` (a single
//! peripheral) is not used here.

use embedded_hal::delay::DelayNs;
use stm32f7xx_hal::rcc::Clocks;

#[derive(Copy, Clone, Debug)]
pub struct BusyDelay {
    cycles_per_us: u32,
}

impl BusyDelay {
    pub fn new(clocks: &Clocks) -> Self {
        Self {
            cycles_per_us: (clocks.sysclk().raw() / 1_000_000).max(1),
        }
    }
}

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = u64::from(ns) * u64::from(self.cycles_per_us) / 1_000;
        cortex_m::asm::delay(cycles.clamp(1, u64::from(u32::MAX)) as u32);
    }

    fn delay_us(&mut self, us: u32) {
        let cycles = u64::from(us) * u64::from(self.cycles_per_us);
        cortex_m::asm::delay(cycles.clamp(1, u64::from(u32::MAX)) as u32);
    }
}
