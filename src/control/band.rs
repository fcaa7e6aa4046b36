// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Slope bands of a quarter circle.
//!
//! A quarter circle is cut into 16 bands by instantaneous slope, ordered from tangent-to-horizontal
//! to tangent-to-vertical. Every band except [`Band::Eighth`] and [`Band::Eight`] comes as a pair:
//! a `*Fast` band that moves in coarse bursts and a `*Slow` band that covers the fine remainder.
//!
//! | Band | X scale | Y scale | Pattern |
//! | ---- | ------- | ------- | ------- |
//! | `HorizontalFast` | whole   | -       | X only |
//! | `HorizontalSlow` | eighth  | -       | X only |
//! | `Eighth`         | whole   | eighth  | X + Y |
//! | `QuarterFast`    | whole   | quarter | X + Y |
//! | `QuarterSlow`    | half    | eighth  | X + Y |
//! | `HalfFast`       | whole   | half    | X + Y |
//! | `HalfSlow`       | quarter | eighth  | X + Y |
//! | `OneFast`        | whole   | whole   | X + Y |
//! | `OneSlow`        | eighth  | eighth  | X + Y |
//! | `TwoFast`        | half    | whole   | X + Y |
//! | `TwoSlow`        | eighth  | quarter | X + Y |
//! | `FourFast`       | quarter | whole   | X + Y |
//! | `FourSlow`       | eighth  | half    | X + Y |
//! | `Eight`          | eighth  | whole   | X + Y |
//! | `VerticalFast`   | -       | whole   | Y only |
//! | `VerticalSlow`   | -       | eighth  | Y only |

use crate::motors::Scale;

/// Number of slope bands.
pub const BAND_COUNT: usize = 16;

/// One slope band, in traversal order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Band {
    HorizontalFast,
    HorizontalSlow,
    Eighth,
    QuarterFast,
    QuarterSlow,
    HalfFast,
    HalfSlow,
    OneFast,
    OneSlow,
    TwoFast,
    TwoSlow,
    FourFast,
    FourSlow,
    Eight,
    VerticalFast,
    VerticalSlow,
}

/// Which step lines a band pulses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AxisPattern {
    /// X only.
    Horizontal,
    /// Y only.
    Vertical,
    /// X and Y together, one pulse each.
    Diagonal,
}

/// How a band is replayed on the axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BandDescriptor {
    pub band: Band,
    pub x_scale: Scale,
    pub y_scale: Scale,
    pub pattern: AxisPattern,
}

impl BandDescriptor {
    /// Horizontal travel per pulse, in eighth-steps.
    #[inline]
    pub const fn x_step(&self) -> u32 {
        match self.pattern {
            AxisPattern::Vertical => 0,
            _ => self.x_scale.eighth_steps(),
        }
    }

    /// Vertical travel per pulse, in eighth-steps.
    #[inline]
    pub const fn y_step(&self) -> u32 {
        match self.pattern {
            AxisPattern::Horizontal => 0,
            _ => self.y_scale.eighth_steps(),
        }
    }
}

const fn desc(band: Band, x_scale: Scale, y_scale: Scale, pattern: AxisPattern) -> BandDescriptor {
    BandDescriptor {
        band,
        x_scale,
        y_scale,
        pattern,
    }
}

use AxisPattern::{Diagonal, Horizontal, Vertical};
use Scale::{Eighth as E, Half as H, Quarter as Q, Whole as W};

/// Every band, in traversal order from horizontal to vertical tangent.
pub static BANDS: [BandDescriptor; BAND_COUNT] = [
    desc(Band::HorizontalFast, W, E, Horizontal),
    desc(Band::HorizontalSlow, E, E, Horizontal),
    desc(Band::Eighth, W, E, Diagonal),
    desc(Band::QuarterFast, W, Q, Diagonal),
    desc(Band::QuarterSlow, H, E, Diagonal),
    desc(Band::HalfFast, W, H, Diagonal),
    desc(Band::HalfSlow, Q, E, Diagonal),
    desc(Band::OneFast, W, W, Diagonal),
    desc(Band::OneSlow, E, E, Diagonal),
    desc(Band::TwoFast, H, W, Diagonal),
    desc(Band::TwoSlow, E, Q, Diagonal),
    desc(Band::FourFast, Q, W, Diagonal),
    desc(Band::FourSlow, E, H, Diagonal),
    desc(Band::Eight, E, W, Diagonal),
    desc(Band::VerticalFast, E, W, Vertical),
    desc(Band::VerticalSlow, E, E, Vertical),
];

impl Band {
    /// Position in traversal order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Band at position `index` in traversal order.
    #[inline]
    pub fn from_index(index: usize) -> Option<Band> {
        BANDS.get(index).map(|d| d.band)
    }

    #[inline]
    pub fn descriptor(self) -> &'static BandDescriptor {
        &BANDS[self.index()]
    }

    /// Coarse burst band paired with this fine band, and how many fine pulses one burst replaces.
    pub const fn fast_variant(self) -> Option<(Band, u32)> {
        match self {
            Band::HorizontalSlow => Some((Band::HorizontalFast, 8)),
            Band::QuarterSlow => Some((Band::QuarterFast, 2)),
            Band::HalfSlow => Some((Band::HalfFast, 4)),
            Band::OneSlow => Some((Band::OneFast, 8)),
            Band::TwoSlow => Some((Band::TwoFast, 4)),
            Band::FourSlow => Some((Band::FourFast, 2)),
            Band::VerticalSlow => Some((Band::VerticalFast, 8)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_are_in_traversal_order() {
        for (i, d) in BANDS.iter().enumerate() {
            assert_eq!(d.band.index(), i);
            assert_eq!(Band::from_index(i), Some(d.band));
        }
        assert_eq!(Band::from_index(BAND_COUNT), None);
    }

    #[test]
    fn fast_burst_covers_whole_fine_pulses() {
        // One burst must travel exactly `multiplier` fine pulses on both axes.
        for d in BANDS.iter() {
            if let Some((fast, multiplier)) = d.band.fast_variant() {
                let f = fast.descriptor();
                assert_eq!(f.pattern, d.pattern, "{:?}", d.band);
                assert_eq!(f.x_step(), d.x_step() * multiplier, "{:?}", d.band);
                assert_eq!(f.y_step(), d.y_step() * multiplier, "{:?}", d.band);
            }
        }
    }

    #[test]
    fn slope_increases_through_the_diagonal_bands() {
        // dy/dx per pulse must not decrease from one band to the next.
        let diagonal: Vec<&BandDescriptor> = BANDS
            .iter()
            .filter(|d| d.pattern == AxisPattern::Diagonal)
            .collect();
        for pair in diagonal.windows(2) {
            let a = pair[0].y_step() * pair[1].x_step();
            let b = pair[1].y_step() * pair[0].x_step();
            assert!(a <= b, "{:?} -> {:?}", pair[0].band, pair[1].band);
        }
    }

    #[test]
    fn coarse_bands_run_whole_steps() {
        use Band::*;
        for band in [Eight, VerticalFast, OneFast, FourFast, TwoFast] {
            assert_eq!(band.descriptor().y_scale, Scale::Whole);
        }
        for band in [Eighth, HorizontalFast, OneFast, QuarterFast, HalfFast] {
            assert_eq!(band.descriptor().x_scale, Scale::Whole);
        }
        assert_eq!(FourSlow.descriptor().y_scale, Scale::Half);
        assert_eq!(HalfFast.descriptor().y_scale, Scale::Half);
        assert_eq!(TwoSlow.descriptor().y_scale, Scale::Quarter);
        assert_eq!(QuarterFast.descriptor().y_scale, Scale::Quarter);
        assert_eq!(QuarterSlow.descriptor().x_scale, Scale::Half);
        assert_eq!(TwoFast.descriptor().x_scale, Scale::Half);
        assert_eq!(HalfSlow.descriptor().x_scale, Scale::Quarter);
        assert_eq!(FourFast.descriptor().x_scale, Scale::Quarter);
    }
}
