// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Gantry Firmware
//!
//! This crate contains the firmware for the two-axis stepper gantry that moves pieces across the
//! board, written in Rust, targeting an STM32F767 MCU driving two A4988 step/direction drivers.
//!
//! Its core traces geometrically accurate circles using only integer pulse counts and four
//! microstep scales: a pulse table is built once per configuration, then replayed per request.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Board geometry and derived circle radii |
//! | [`control`] | Slope bands, pulse-table builder and circle tracer |
//! | [`motors`] | `Axis` capability interface, the gantry, and a simulated axis |
//! | [`drivers`] | Device-level drivers (A4988) |
//! | `hw` | MCU-level wrappers around GPIO, delay and USART (target builds only) |
//!
//! ## Getting Started
//!
//! Run the tests and the host simulator:
//!
//! ```bash
//! cargo test
//! cargo run
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod motors;

#[cfg(target_os = "none")]
pub mod hw;
