// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capability interface for one step/direction axis.
//!
//! The motion core only ever talks to an axis through [`Axis`], so it can be driven against real
//! hardware ([`crate::drivers::A4988`]) or a simulated axis ([`crate::motors::SimAxis`]).

/// Travel direction along one axis.
///
/// On the gantry, X `Positive` is right and Y `Positive` is up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Carriage moves right.
    pub const RIGHT: Self = Direction::Positive;
    /// Carriage moves left.
    pub const LEFT: Self = Direction::Negative;
    /// Carriage moves up (away from the near rank).
    pub const UP: Self = Direction::Positive;
    /// Carriage moves down.
    pub const DOWN: Self = Direction::Negative;

    /// `+1` or `-1`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }
}

/// Microstep resolution of one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scale {
    Eighth,
    Quarter,
    Half,
    Whole,
}

impl Scale {
    /// Distance covered by one pulse at this scale, in eighth-steps.
    #[inline]
    pub const fn eighth_steps(self) -> u32 {
        match self {
            Scale::Eighth => 1,
            Scale::Quarter => 2,
            Scale::Half => 4,
            Scale::Whole => 8,
        }
    }
}

/// Logic level of a step line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepLevel {
    Low,
    High,
}

/// One stepper axis behind an edge-triggered step/direction driver.
///
/// The driver advances one microstep on each low-to-high transition of the step line.
pub trait Axis {
    type Error;

    /// Latch the travel direction for subsequent pulses.
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Select the microstep resolution for subsequent pulses.
    fn set_scale(&mut self, scale: Scale) -> Result<(), Self::Error>;

    /// Drive the step line. Returns as soon as the line is written.
    fn set_step(&mut self, level: StepLevel) -> Result<(), Self::Error>;

    /// Hold the step lines at their current level for one half period.
    ///
    /// Called once after each low phase and once after each high phase. When two axes step
    /// together, only one of them is asked to settle, so both edges of a phase stay back to back.
    fn settle(&mut self) {}

    /// Emit one pulse: step line low, settle, high, settle.
    fn pulse(&mut self) -> Result<(), Self::Error> {
        self.set_step(StepLevel::Low)?;
        self.settle();
        self.set_step(StepLevel::High)?;
        self.settle();
        Ok(())
    }
}

impl<A: Axis + ?Sized> Axis for &mut A {
    type Error = A::Error;

    #[inline]
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        (**self).set_direction(direction)
    }

    #[inline]
    fn set_scale(&mut self, scale: Scale) -> Result<(), Self::Error> {
        (**self).set_scale(scale)
    }

    #[inline]
    fn set_step(&mut self, level: StepLevel) -> Result<(), Self::Error> {
        (**self).set_step(level)
    }

    #[inline]
    fn settle(&mut self) {
        (**self).settle()
    }

    #[inline]
    fn pulse(&mut self) -> Result<(), Self::Error> {
        (**self).pulse()
    }
}
