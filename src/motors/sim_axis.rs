// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-memory axis used by the host simulator and the test-suite.
//!
//! Behaves like an edge-triggered driver: a pulse is counted on each low-to-high transition of the
//! step line, and the position advances by the current scale in the current direction.

use core::convert::Infallible;

use crate::motors::axis::{Axis, Direction, Scale, StepLevel};

/// Simulated step/direction axis.
#[derive(Clone, Debug)]
pub struct SimAxis {
    direction: Direction,
    scale: Scale,
    step: StepLevel,

    /// Position in eighth-steps relative to power-up.
    position: i64,
    /// Lowest and highest position reached.
    extent: (i64, i64),
    /// Rising edges seen on the step line.
    pulses: u32,
    /// Distance travelled regardless of direction, in eighth-steps.
    travel: u64,

    direction_writes: u32,
    scale_writes: u32,
}

impl SimAxis {
    /// Create an axis at position zero, eighth-stepping in the positive direction, step line high.
    pub fn new() -> Self {
        Self {
            direction: Direction::Positive,
            scale: Scale::Eighth,
            step: StepLevel::High,
            position: 0,
            extent: (0, 0),
            pulses: 0,
            travel: 0,
            direction_writes: 0,
            scale_writes: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Lowest and highest position reached since the last reset.
    #[inline]
    pub fn extent(&self) -> (i64, i64) {
        self.extent
    }

    #[inline]
    pub fn pulses(&self) -> u32 {
        self.pulses
    }

    #[inline]
    pub fn travel(&self) -> u64 {
        self.travel
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[inline]
    pub fn direction_writes(&self) -> u32 {
        self.direction_writes
    }

    #[inline]
    pub fn scale_writes(&self) -> u32 {
        self.scale_writes
    }

    /// Clear counters and return to position zero. Line states are kept.
    pub fn reset_counters(&mut self) {
        self.position = 0;
        self.extent = (0, 0);
        self.pulses = 0;
        self.travel = 0;
        self.direction_writes = 0;
        self.scale_writes = 0;
    }
}

impl Default for SimAxis {
    fn default() -> Self {
        Self::new()
    }
}

impl Axis for SimAxis {
    type Error = Infallible;

    fn set_direction(&mut self, direction: Direction) -> Result<(), Infallible> {
        self.direction = direction;
        self.direction_writes += 1;
        Ok(())
    }

    fn set_scale(&mut self, scale: Scale) -> Result<(), Infallible> {
        self.scale = scale;
        self.scale_writes += 1;
        Ok(())
    }

    fn set_step(&mut self, level: StepLevel) -> Result<(), Infallible> {
        if self.step == StepLevel::Low && level == StepLevel::High {
            let distance = self.scale.eighth_steps();
            self.pulses += 1;
            self.travel += u64::from(distance);
            self.position += i64::from(self.direction.sign()) * i64::from(distance);
            self.extent.0 = self.extent.0.min(self.position);
            self.extent.1 = self.extent.1.max(self.position);
        }
        self.step = level;
        Ok(())
    }
}
