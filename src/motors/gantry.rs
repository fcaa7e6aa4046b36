// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-axis gantry.
//!
//! Owns the X and Y axes and serves circle-draw requests from a prebuilt [`PulseTable`].

use crate::control::circle::{self, Quadrant, TraceError, TraceReport};
use crate::control::PulseTable;
use crate::motors::axis::Axis;

/// X/Y gantry built from two step/direction axes.
pub struct Gantry<X, Y> {
    x: X,
    y: Y,
}

impl<X, Y> Gantry<X, Y>
where
    X: Axis,
    Y: Axis<Error = X::Error>,
{
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }

    /// Access the horizontal axis.
    #[inline]
    pub fn x_axis(&mut self) -> &mut X {
        &mut self.x
    }

    /// Access the vertical axis.
    #[inline]
    pub fn y_axis(&mut self) -> &mut Y {
        &mut self.y
    }

    /// Trace circle `circle` of `table` as a full 360° sweep starting at `start`.
    ///
    /// The carriage must sit on the circle at the starting point of `start`; it ends there too.
    pub fn trace_circle<const CIRCLES: usize>(
        &mut self,
        table: &PulseTable<CIRCLES>,
        circle: usize,
        start: Quadrant,
    ) -> Result<TraceReport, TraceError<X::Error>> {
        circle::trace_circle(&mut self.x, &mut self.y, table, circle, start)
    }

    /// Release both axes.
    pub fn free(self) -> (X, Y) {
        (self.x, self.y)
    }
}
