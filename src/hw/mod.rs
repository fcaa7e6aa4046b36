// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Support
//!
//! MCU-level wrappers for the STM32F767 gantry board: pin map, GPIO lines, busy-wait delay and the
//! USART debug console.

pub mod delay;
pub mod gpio;
pub mod pins;
pub mod usart;

pub use delay::BusyDelay;
pub use gpio::Line;
pub use pins::BoardPins;
pub use usart::Usart;
