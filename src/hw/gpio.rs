// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Push-pull output line exposed through the `embedded-hal` 1.0 digital traits.
//!
//! Lets the board's STEP, DIR and MSx pins drive the generic [`crate::drivers::A4988`] driver.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// Output line, generic over any GPIO pin.
pub struct Line<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> Line<P, N> {
    /// Take ownership of a push-pull output `pin` and drive it low.
    pub fn new(mut pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        pin.set_state(gpio::PinState::Low);
        Self { pin }
    }

    pub fn free(self) -> gpio::Pin<P, N, Output<PushPull>> {
        self.pin
    }
}

impl<const P: char, const N: u8> ErrorType for Line<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> OutputPin for Line<P, N> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_state(gpio::PinState::Low);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_state(gpio::PinState::High);
        Ok(())
    }
}
