// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Circle tracer.
//!
//! Replays one quarter circle of a [`PulseTable`] four times, mirrored into each quadrant, as
//! step/direction pulses on the X and Y axes. No arithmetic happens here beyond counting pulses.
//!
//! Quadrants are visited counter-clockwise starting from the top of the circle:
//!
//! | Quadrant | Arc | X | Y | Band order |
//! | -------- | --- | - | - | ---------- |
//! | 0 `Top`    | top to left     | left  | down | ascending  |
//! | 1 `Left`   | left to bottom  | right | down | descending |
//! | 2 `Bottom` | bottom to right | right | up   | ascending  |
//! | 3 `Right`  | right to top    | left  | up   | descending |
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let table = build_pulse_table::<NUM_CIRCLES>(&GantryConfig::DEFAULT)?;
//!
//! trace_circle(&mut x_axis, &mut y_axis, &table, 0, Quadrant::Top)?;
//! ```

use core::fmt;

use log::{debug, trace};

use crate::control::band::{AxisPattern, Band, BandDescriptor, BAND_COUNT};
use crate::control::pulse_table::{BandCounts, PulseTable};
use crate::motors::{Axis, Direction, StepLevel};

/// One 90° arc of a circle, named by the point it starts from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Quadrant {
    Top = 0,
    Left = 1,
    Bottom = 2,
    Right = 3,
}

/// Order in which a quadrant visits the slope bands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanOrder {
    /// Horizontal tangent to vertical tangent.
    Ascending,
    /// Vertical tangent to horizontal tangent.
    Descending,
}

impl ScanOrder {
    /// Band visited at position `step` (0..16) of this scan.
    #[inline]
    pub fn band_at(self, step: usize) -> Option<Band> {
        match self {
            ScanOrder::Ascending => Band::from_index(step),
            ScanOrder::Descending => BAND_COUNT
                .checked_sub(step + 1)
                .and_then(Band::from_index),
        }
    }

    /// Every band, in scan order.
    pub fn bands(self) -> impl Iterator<Item = Band> {
        (0..BAND_COUNT).filter_map(move |step| self.band_at(step))
    }
}

/// Quadrant index outside `0..4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidQuadrant(pub u8);

impl fmt::Display for InvalidQuadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quadrant {} out of range 0..4", self.0)
    }
}

impl core::error::Error for InvalidQuadrant {}

impl TryFrom<u8> for Quadrant {
    type Error = InvalidQuadrant;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Quadrant::Top),
            1 => Ok(Quadrant::Left),
            2 => Ok(Quadrant::Bottom),
            3 => Ok(Quadrant::Right),
            other => Err(InvalidQuadrant(other)),
        }
    }
}

impl Quadrant {
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The next quadrant counter-clockwise, wrapping after `Right`.
    pub const fn next(self) -> Quadrant {
        match self {
            Quadrant::Top => Quadrant::Left,
            Quadrant::Left => Quadrant::Bottom,
            Quadrant::Bottom => Quadrant::Right,
            Quadrant::Right => Quadrant::Top,
        }
    }

    /// All four quadrants, starting at `self`.
    pub fn sweep(self) -> [Quadrant; 4] {
        let mut out = [self; 4];
        for i in 1..out.len() {
            out[i] = out[i - 1].next();
        }
        out
    }

    #[inline]
    pub const fn x_direction(self) -> Direction {
        match self {
            Quadrant::Top | Quadrant::Right => Direction::LEFT,
            Quadrant::Left | Quadrant::Bottom => Direction::RIGHT,
        }
    }

    #[inline]
    pub const fn y_direction(self) -> Direction {
        match self {
            Quadrant::Top | Quadrant::Left => Direction::DOWN,
            Quadrant::Bottom | Quadrant::Right => Direction::UP,
        }
    }

    #[inline]
    pub const fn scan_order(self) -> ScanOrder {
        match self {
            Quadrant::Top | Quadrant::Bottom => ScanOrder::Ascending,
            Quadrant::Left | Quadrant::Right => ScanOrder::Descending,
        }
    }
}

/// Errors raised while tracing a circle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceError<E> {
    /// The circle index is not in the table.
    UnknownCircle { circle: usize, circles: usize },
    /// A step, direction or scale line could not be driven.
    Axis(E),
}

impl<E: fmt::Debug> fmt::Display for TraceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::UnknownCircle { circle, circles } => {
                write!(f, "circle {} not in table of {}", circle, circles)
            }
            TraceError::Axis(e) => write!(f, "axis error: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for TraceError<E> {}

/// Pulses emitted by one full circle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceReport {
    pub x_pulses: u32,
    pub y_pulses: u32,
}

/// Trace circle `circle` of `table`, visiting all four quadrants starting at `start`.
///
/// Direction lines are set once per quadrant and both scale lines once per band, including bands
/// with no pulses. A pin error aborts the trace mid-quadrant and leaves the lines where they were.
pub fn trace_circle<X, Y, const CIRCLES: usize>(
    x: &mut X,
    y: &mut Y,
    table: &PulseTable<CIRCLES>,
    circle: usize,
    start: Quadrant,
) -> Result<TraceReport, TraceError<X::Error>>
where
    X: Axis,
    Y: Axis<Error = X::Error>,
{
    let counts = table.circle(circle).ok_or(TraceError::UnknownCircle {
        circle,
        circles: CIRCLES,
    })?;

    debug!(
        "tracing circle {} (radius {}) from {:?}",
        circle,
        table.radius(circle).unwrap_or(0),
        start
    );

    let mut report = TraceReport::default();
    for quadrant in start.sweep() {
        let (xp, yp) = trace_quadrant(x, y, counts, quadrant).map_err(TraceError::Axis)?;
        report.x_pulses += xp;
        report.y_pulses += yp;
    }

    debug!(
        "circle {} done: {} x / {} y pulses",
        circle, report.x_pulses, report.y_pulses
    );
    Ok(report)
}

fn trace_quadrant<X, Y>(
    x: &mut X,
    y: &mut Y,
    counts: &BandCounts,
    quadrant: Quadrant,
) -> Result<(u32, u32), X::Error>
where
    X: Axis,
    Y: Axis<Error = X::Error>,
{
    debug!(
        "quadrant {:?}: x {:?}, y {:?}, {:?}",
        quadrant,
        quadrant.x_direction(),
        quadrant.y_direction(),
        quadrant.scan_order()
    );

    y.set_direction(quadrant.y_direction())?;
    x.set_direction(quadrant.x_direction())?;

    let mut pulses = (0, 0);
    for band in quadrant.scan_order().bands() {
        let (xp, yp) = emit_band(x, y, band.descriptor(), counts.get(band))?;
        pulses.0 += xp;
        pulses.1 += yp;
    }
    Ok(pulses)
}

fn emit_band<X, Y>(
    x: &mut X,
    y: &mut Y,
    band: &BandDescriptor,
    count: u32,
) -> Result<(u32, u32), X::Error>
where
    X: Axis,
    Y: Axis<Error = X::Error>,
{
    y.set_scale(band.y_scale)?;
    x.set_scale(band.x_scale)?;

    if count > 0 {
        trace!("{:?}: {} pulses", band.band, count);
    }

    match band.pattern {
        AxisPattern::Vertical => {
            for _ in 0..count {
                y.pulse()?;
            }
            Ok((0, count))
        }
        AxisPattern::Horizontal => {
            for _ in 0..count {
                x.pulse()?;
            }
            Ok((count, 0))
        }
        AxisPattern::Diagonal => {
            // Both lines fall, then both rise, so the two drivers step on the same edge. One
            // settle per phase keeps diagonal pulses as long as single-axis ones.
            for _ in 0..count {
                x.set_step(StepLevel::Low)?;
                y.set_step(StepLevel::Low)?;
                x.settle();
                x.set_step(StepLevel::High)?;
                y.set_step(StepLevel::High)?;
                x.settle();
            }
            Ok((count, count))
        }
    }
}
