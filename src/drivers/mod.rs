// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above raw GPIO and below the motion
//! logic.
//!
//! ## Existing drivers
//!
//! - [`a4988`] – Allegro A4988 step/direction microstepping driver

pub mod a4988;

pub use a4988::A4988;
