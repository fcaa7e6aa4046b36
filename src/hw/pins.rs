// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F767 gantry board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub usart1: Usart1Pins,
    pub x_axis: XAxisPins,
    pub y_axis: YAxisPins,
}

// USART1 TX/RX (debug console)
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// X (file) axis A4988 control lines
pub struct XAxisPins {
    pub step: gpioe::PE9<Output<PushPull>>,
    pub dir: gpioe::PE10<Output<PushPull>>,
    pub ms1: gpioe::PE7<Output<PushPull>>,
    pub ms2: gpioe::PE8<Output<PushPull>>,
}

/// Y (rank) axis A4988 control lines
pub struct YAxisPins {
    pub step: gpiod::PD12<Output<PushPull>>,
    pub dir: gpiod::PD13<Output<PushPull>>,
    pub ms1: gpiod::PD14<Output<PushPull>>,
    pub ms2: gpiod::PD15<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            x_axis: XAxisPins {
                step: gpioe.pe9.into_push_pull_output(),
                dir: gpioe.pe10.into_push_pull_output(),
                ms1: gpioe.pe7.into_push_pull_output(),
                ms2: gpioe.pe8.into_push_pull_output(),
            },

            y_axis: YAxisPins {
                step: gpiod.pd12.into_push_pull_output(),
                dir: gpiod.pd13.into_push_pull_output(),
                ms1: gpiod.pd14.into_push_pull_output(),
                ms2: gpiod.pd15.into_push_pull_output(),
            },
        }
    }
}
