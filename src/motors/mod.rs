// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Axis Abstractions
//!
//! This module contains the axis capability interface and the motor-level wrappers that sit above
//! device-level drivers in `drivers`.
//!
//! ## Modules
//!
//! - [`axis`] - `Axis` trait plus direction, microstep scale and step level types.
//! - [`gantry`] - Two-axis gantry built from any pair of `Axis` implementations.
//! - [`sim_axis`] - In-memory axis for the host simulator and tests.

pub mod axis;
pub mod gantry;
pub mod sim_axis;

pub use axis::{Axis, Direction, Scale, StepLevel};
pub use gantry::Gantry;
pub use sim_axis::SimAxis;
