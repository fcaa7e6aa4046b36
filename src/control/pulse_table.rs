// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-circle pulse counts for every slope band.
//!
//! The table is built once per configuration, before any tracing. For each circle the builder walks
//! one quarter of the arc from its topmost point, counting how many eighth-step pulses fall inside
//! each band, then regroups fine pulses into coarse bursts wherever a whole burst fits.
//!
//! The quarter circle is all that is stored; the tracer mirrors it into the other three quadrants.

use core::ops::Index;

use log::{debug, info};

use crate::config::{ConfigError, GantryConfig, MAX_RADIUS};
use crate::control::band::{Band, BANDS, BAND_COUNT};
use crate::control::slope::slope;

/// Extra stopping condition on a band walk, in eighth-steps remaining.
#[derive(Copy, Clone)]
enum Guard {
    None,
    X(i32),
    Y(i32),
}

/// One stage of the quarter-circle walk.
///
/// Pulses are counted into `band` while the slope stays below `threshold` and the guard holds. Each
/// pulse consumes `dx` horizontal and `dy` vertical eighth-steps.
struct SlopeWalk {
    band: Band,
    threshold: f32,
    dx: i32,
    dy: i32,
    guard: Guard,
}

#[rustfmt::skip]
const WALK: [SlopeWalk; 8] = [
    SlopeWalk { band: Band::HorizontalSlow, threshold: 1.0 / 16.0, dx: 1, dy: 0, guard: Guard::None },
    SlopeWalk { band: Band::Eighth, threshold: 3.0 / 16.0, dx: 8, dy: 1, guard: Guard::X(8) },
    SlopeWalk { band: Band::QuarterSlow, threshold: 3.0 / 8.0, dx: 4, dy: 1, guard: Guard::X(4) },
    SlopeWalk { band: Band::HalfSlow, threshold: 3.0 / 4.0, dx: 2, dy: 1, guard: Guard::X(2) },
    SlopeWalk { band: Band::OneSlow, threshold: 3.0 / 2.0, dx: 1, dy: 1, guard: Guard::None },
    SlopeWalk { band: Band::TwoSlow, threshold: 3.0, dx: 1, dy: 2, guard: Guard::Y(2) },
    SlopeWalk { band: Band::FourSlow, threshold: 6.0, dx: 1, dy: 4, guard: Guard::Y(4) },
    SlopeWalk { band: Band::Eight, threshold: 12.0, dx: 1, dy: 8, guard: Guard::Y(8) },
];

/// Pulse counts of one quarter circle, indexed by [`Band`].
///
/// `*Slow`, [`Band::Eighth`] and [`Band::Eight`] count pulses at their fine scale; `*Fast` bands
/// count whole bursts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BandCounts {
    counts: [u32; BAND_COUNT],
}

impl BandCounts {
    /// Walk a quarter circle of `radius` eighth-steps and count its pulses per band.
    pub fn for_radius(radius: u32) -> Result<Self, ConfigError> {
        if radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if radius > MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge { radius });
        }

        let mut raw = [0i32; BAND_COUNT];
        accumulate_quarter(&mut raw, radius as i32);

        let mut counts = [0u32; BAND_COUNT];
        for (count, &n) in counts.iter_mut().zip(raw.iter()) {
            *count = u32::try_from(n).map_err(|_| ConfigError::RadiusTooSmall { radius })?;
        }

        let mut table = Self { counts };
        table.canonicalize();
        Ok(table)
    }

    /// Build from explicit per-band counts, in traversal order.
    pub const fn from_counts(counts: [u32; BAND_COUNT]) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn get(&self, band: Band) -> u32 {
        self.counts[band.index()]
    }

    /// Total pulses emitted on each axis while replaying one quadrant.
    pub fn pulses(&self) -> (u32, u32) {
        BANDS.iter().fold((0, 0), |(x, y), d| {
            let n = self.get(d.band);
            let dx = if d.x_step() > 0 { n } else { 0 };
            let dy = if d.y_step() > 0 { n } else { 0 };
            (x + dx, y + dy)
        })
    }

    /// Distance travelled on each axis over one quadrant, in eighth-steps.
    pub fn travel(&self) -> (u32, u32) {
        BANDS.iter().fold((0, 0), |(x, y), d| {
            let n = self.get(d.band);
            (x + n * d.x_step(), y + n * d.y_step())
        })
    }

    /// Regroup fine pulses into coarse bursts.
    ///
    /// Travel is unchanged; only the number of emitted pulses shrinks.
    fn canonicalize(&mut self) {
        for d in BANDS.iter() {
            if let Some((fast, multiplier)) = d.band.fast_variant() {
                let slow = self.counts[d.band.index()];
                self.counts[fast.index()] += slow / multiplier;
                self.counts[d.band.index()] = slow % multiplier;
            }
        }
    }
}

impl Index<Band> for BandCounts {
    type Output = u32;

    #[inline]
    fn index(&self, band: Band) -> &u32 {
        &self.counts[band.index()]
    }
}

/// Add the fine pulse counts of one quarter circle into `raw`.
///
/// Accumulates; `raw` must start zeroed for the result to describe a single circle.
fn accumulate_quarter(raw: &mut [i32; BAND_COUNT], radius: i32) {
    let (mut x, mut y) = (radius, radius);

    for walk in WALK.iter() {
        loop {
            let guarded = match walk.guard {
                Guard::None => true,
                Guard::X(min) => x >= min,
                Guard::Y(min) => y >= min,
            };
            if !guarded || slope(radius, x, y) >= walk.threshold {
                break;
            }
            raw[walk.band.index()] += 1;
            x -= walk.dx;
            y -= walk.dy;
        }
    }

    // Leftover travel goes to the flat prefix and the vertical tail. x is negative when the walk
    // overshoots horizontally.
    raw[Band::HorizontalSlow.index()] += x;
    raw[Band::VerticalSlow.index()] += y;
}

/// Pulse counts for `CIRCLES` concentric circles, largest first.
///
/// Only obtainable from [`build_pulse_table`], so a table in hand is always complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PulseTable<const CIRCLES: usize> {
    radii: [u32; CIRCLES],
    circles: [BandCounts; CIRCLES],
}

impl<const CIRCLES: usize> PulseTable<CIRCLES> {
    /// Number of circles in the table.
    #[inline]
    pub const fn len(&self) -> usize {
        CIRCLES
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        CIRCLES == 0
    }

    /// Counts for `circle` (0 = largest), or `None` if out of range.
    #[inline]
    pub fn circle(&self, circle: usize) -> Option<&BandCounts> {
        self.circles.get(circle)
    }

    /// Radius of `circle` in eighth-steps, or `None` if out of range.
    #[inline]
    pub fn radius(&self, circle: usize) -> Option<u32> {
        self.radii.get(circle).copied()
    }

    /// Pulse count of `band` on `circle`, or `None` if the circle is out of range.
    #[inline]
    pub fn pulse_count(&self, circle: usize, band: Band) -> Option<u32> {
        self.circle(circle).map(|c| c.get(band))
    }
}

/// Build the pulse table for every circle of `config`.
///
/// Each call starts from a zeroed table; rebuilding for a new configuration is just another call.
pub fn build_pulse_table<const CIRCLES: usize>(
    config: &GantryConfig,
) -> Result<PulseTable<CIRCLES>, ConfigError> {
    config.validate(CIRCLES)?;

    let mut radii = [0u32; CIRCLES];
    let mut circles = [BandCounts::default(); CIRCLES];

    for (i, (radius, counts)) in radii.iter_mut().zip(circles.iter_mut()).enumerate() {
        *radius = config
            .radius(i, CIRCLES)
            .ok_or(ConfigError::NoCircles)?;
        *counts = BandCounts::for_radius(*radius)?;

        let (xp, yp) = counts.pulses();
        debug!(
            "circle {}: radius {} eighth-steps, {} x / {} y pulses per quadrant",
            i, radius, xp, yp
        );
    }

    info!(
        "pulse table built: {} circles, radius {}..{} eighth-steps",
        CIRCLES,
        radii.last().copied().unwrap_or(0),
        radii.first().copied().unwrap_or(0)
    );

    Ok(PulseTable { radii, circles })
}
