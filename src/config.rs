// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Gantry geometry configuration.
//!
//! All radii are expressed in eighth-steps, the finest pulse unit the drivers are configured for.
//! The largest circle is inscribed in one board square; smaller circles are spaced evenly inward.

use core::fmt;

/// Number of concentric circles the firmware traces around a square.
pub const NUM_CIRCLES: usize = 5;

/// Microsteps per full step at the finest scale (eighth-stepping).
pub const MICROSTEPS_PER_STEP: u32 = 8;

/// Largest radius accepted, in eighth-steps.
///
/// Keeps every operand of the slope computation exactly representable as `f32`.
pub const MAX_RADIUS: u32 = 1 << 16;

/// Errors raised while validating a configuration or building its pulse table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The circle count is zero.
    NoCircles,
    /// The smallest circle collapsed to a zero radius.
    ZeroRadius,
    /// A radius exceeds [`MAX_RADIUS`].
    RadiusTooLarge { radius: u32 },
    /// The slope walk for this radius overshoots its horizontal travel.
    RadiusTooSmall { radius: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoCircles => write!(f, "circle count is zero"),
            ConfigError::ZeroRadius => write!(f, "smallest circle has a zero radius"),
            ConfigError::RadiusTooLarge { radius } => {
                write!(f, "radius {} exceeds {} eighth-steps", radius, MAX_RADIUS)
            }
            ConfigError::RadiusTooSmall { radius } => {
                write!(f, "radius {} is too small to partition into slope bands", radius)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Physical geometry of the board and drive train.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GantryConfig {
    /// Edge length of one board square (mm).
    pub millimeters_per_unitspace: u32,
    /// Full steps per millimeter of carriage travel.
    pub steps_per_millimeter: u32,
}

impl GantryConfig {
    /// 50 mm squares, 200 step/rev motors on 20T GT2 pulleys (5 steps/mm).
    pub const DEFAULT: Self = Self {
        millimeters_per_unitspace: 50,
        steps_per_millimeter: 5,
    };

    /// Radius of the circle inscribed in one square, in eighth-steps.
    #[inline]
    pub fn outer_radius(&self) -> u32 {
        self.millimeters_per_unitspace
            .saturating_mul(self.steps_per_millimeter)
            .saturating_mul(MICROSTEPS_PER_STEP)
            / 2
    }

    /// Largest traced radius: the outer radius rounded down to a multiple of the circle count.
    pub fn largest_radius(&self, circles: usize) -> u32 {
        let outer = self.outer_radius();
        match circles as u32 {
            0 => outer,
            n => outer - outer % n,
        }
    }

    /// Radius decrement between neighbouring circles.
    pub fn delta_r(&self, circles: usize) -> u32 {
        match circles as u32 {
            0 => 0,
            n => self.largest_radius(circles) / n,
        }
    }

    /// Radius of `circle` (0 = largest), or `None` if the index is out of range.
    pub fn radius(&self, circle: usize, circles: usize) -> Option<u32> {
        if circle >= circles {
            return None;
        }
        Some(self.largest_radius(circles) - circle as u32 * self.delta_r(circles))
    }

    /// Check that `circles` concentric circles fit this geometry.
    pub fn validate(&self, circles: usize) -> Result<(), ConfigError> {
        if circles == 0 {
            return Err(ConfigError::NoCircles);
        }

        let largest = self.largest_radius(circles);
        if largest > MAX_RADIUS {
            return Err(ConfigError::RadiusTooLarge { radius: largest });
        }
        if self.delta_r(circles) == 0 {
            return Err(ConfigError::ZeroRadius);
        }

        Ok(())
    }
}

impl Default for GantryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let cfg = GantryConfig::DEFAULT;
        assert_eq!(cfg.outer_radius(), 1000);
        assert_eq!(cfg.largest_radius(NUM_CIRCLES), 1000);
        assert_eq!(cfg.delta_r(NUM_CIRCLES), 200);

        let radii: [u32; NUM_CIRCLES] =
            core::array::from_fn(|i| cfg.radius(i, NUM_CIRCLES).unwrap());
        assert_eq!(radii, [1000, 800, 600, 400, 200]);
        assert_eq!(cfg.radius(NUM_CIRCLES, NUM_CIRCLES), None);
    }

    #[test]
    fn largest_radius_is_multiple_of_circle_count() {
        let cfg = GantryConfig {
            millimeters_per_unitspace: 37,
            steps_per_millimeter: 3,
        };
        // 37 * 3 * 8 / 2 = 444
        assert_eq!(cfg.outer_radius(), 444);
        assert_eq!(cfg.largest_radius(5), 440);
        assert_eq!(cfg.delta_r(5), 88);
        assert_eq!(cfg.radius(4, 5), Some(88));
    }

    #[test]
    fn validate_rejects_degenerate_geometry() {
        let cfg = GantryConfig::DEFAULT;
        assert_eq!(cfg.validate(0), Err(ConfigError::NoCircles));
        assert_eq!(cfg.validate(2000), Err(ConfigError::ZeroRadius));
        assert_eq!(cfg.validate(NUM_CIRCLES), Ok(()));

        let huge = GantryConfig {
            millimeters_per_unitspace: 1000,
            steps_per_millimeter: 100,
        };
        assert_eq!(
            huge.validate(1),
            Err(ConfigError::RadiusTooLarge { radius: 400_000 })
        );
    }
}
