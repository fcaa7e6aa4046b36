// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! End-to-end: build the default table and trace it on simulated axes.

use gantry::config::{ConfigError, GantryConfig, NUM_CIRCLES};
use gantry::control::{build_pulse_table, Band, BandCounts, Quadrant, TraceError, BANDS};
use gantry::motors::{Gantry, SimAxis};

#[test]
fn default_table_traces_closed_circles() {
    let table = build_pulse_table::<NUM_CIRCLES>(&GantryConfig::DEFAULT).unwrap();
    let mut gantry = Gantry::new(SimAxis::new(), SimAxis::new());

    for circle in 0..table.len() {
        let r = i64::from(table.radius(circle).unwrap());
        for start in Quadrant::Top.sweep() {
            gantry.x_axis().reset_counters();
            gantry.y_axis().reset_counters();

            let report = gantry.trace_circle(&table, circle, start).unwrap();

            assert_eq!(gantry.x_axis().position(), 0, "circle {circle} from {start:?}");
            assert_eq!(gantry.y_axis().position(), 0, "circle {circle} from {start:?}");
            assert_eq!(gantry.x_axis().travel() as i64, 4 * r);
            assert_eq!(gantry.y_axis().travel() as i64, 4 * r);

            assert_eq!(report.x_pulses, gantry.x_axis().pulses());
            assert_eq!(report.y_pulses, gantry.y_axis().pulses());
        }
    }
}

#[test]
fn extents_match_the_starting_point() {
    let table = build_pulse_table::<NUM_CIRCLES>(&GantryConfig::DEFAULT).unwrap();
    let r = i64::from(table.radius(0).unwrap());
    let mut gantry = Gantry::new(SimAxis::new(), SimAxis::new());

    // Top of the circle: the centre is r below, so the carriage sweeps one radius either side in
    // x and a full diameter downward in y.
    gantry.trace_circle(&table, 0, Quadrant::Top).unwrap();
    assert_eq!(gantry.x_axis().extent(), (-r, r));
    assert_eq!(gantry.y_axis().extent(), (-2 * r, 0));

    let (mut x, mut y) = gantry.free();
    x.reset_counters();
    y.reset_counters();
    let mut gantry = Gantry::new(x, y);

    // Rightmost point: a full diameter to the left, one radius up and down.
    gantry.trace_circle(&table, 0, Quadrant::Right).unwrap();
    assert_eq!(gantry.x_axis().extent(), (-2 * r, 0));
    assert_eq!(gantry.y_axis().extent(), (-r, r));
}

#[test]
fn public_band_counts_match_known_radius() {
    let counts = BandCounts::for_radius(64).unwrap();
    let expected = [
        (Band::Eighth, 1),
        (Band::QuarterFast, 1),
        (Band::QuarterSlow, 1),
        (Band::HalfFast, 2),
        (Band::OneFast, 2),
        (Band::TwoFast, 2),
        (Band::FourFast, 1),
        (Band::FourSlow, 1),
        (Band::Eight, 1),
    ];

    for d in BANDS.iter() {
        let want = expected
            .iter()
            .find(|(band, _)| *band == d.band)
            .map_or(0, |&(_, n)| n);
        assert_eq!(counts.get(d.band), want, "{:?}", d.band);
    }
    assert_eq!(counts.travel(), (64, 64));
}

#[test]
fn unusable_geometry_is_reported() {
    let tiny = GantryConfig {
        millimeters_per_unitspace: 1,
        steps_per_millimeter: 1,
    };
    // Outer radius 4 leaves a zero step between circles.
    assert_eq!(
        build_pulse_table::<NUM_CIRCLES>(&tiny).unwrap_err(),
        ConfigError::ZeroRadius
    );

    let table = build_pulse_table::<NUM_CIRCLES>(&GantryConfig::DEFAULT).unwrap();
    let mut gantry = Gantry::new(SimAxis::new(), SimAxis::new());
    assert_eq!(
        gantry.trace_circle(&table, NUM_CIRCLES, Quadrant::Top),
        Err(TraceError::UnknownCircle {
            circle: NUM_CIRCLES,
            circles: NUM_CIRCLES,
        })
    );
}
