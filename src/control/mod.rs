// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motion Control
//!
//! Integer-only circle interpolation for the two-axis gantry.
//!
//! ## Modules
//!
//! - [`slope`] - Instantaneous slope of a quarter circle (used only while building tables).
//! - [`band`] - The 16 ordered slope bands and how each is replayed on the axes.
//! - [`pulse_table`] - One-time builder of per-circle, per-band pulse counts.
//! - [`circle`] - Quadrant-symmetric tracer that replays a table as step/direction pulses.

pub mod band;
pub mod circle;
pub mod pulse_table;
pub mod slope;

pub use band::{AxisPattern, Band, BandDescriptor, BANDS, BAND_COUNT};
pub use circle::{trace_circle, Quadrant, ScanOrder, TraceError, TraceReport};
pub use pulse_table::{build_pulse_table, BandCounts, PulseTable};
pub use slope::slope;
