// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Gantry firmware entry point.
//!
//! On the board this brings up the debug console and both A4988 axes, builds the pulse table and
//! traces the largest circle once as a self-test. On a host it runs the same table against
//! simulated axes and reports what each circle would emit.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use cortex_m_rt::entry;
    use log::{error, info, LevelFilter};
    use panic_halt as _;

    use hal::{
        pac,
        prelude::*,
        serial::{Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use gantry::config::{GantryConfig, NUM_CIRCLES};
    use gantry::control::{build_pulse_table, Quadrant};
    use gantry::drivers::A4988;
    use gantry::hw::{usart, BoardPins, BusyDelay, Line, Usart};
    use gantry::motors::Gantry;

    fn halt() -> ! {
        loop {
            cortex_m::asm::nop();
        }
    }

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

        // USART1 (DBG)
        let usart_cfg = Config {
            baud_rate: 115_200.bps(),
            ..Default::default()
        };
        let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
        if usart::init_logger(Usart::new(serial), LevelFilter::Info).is_err() {
            halt();
        }

        // Axes
        let delay = BusyDelay::new(&clocks);
        let x_axis = A4988::new(
            Line::new(pins.x_axis.step),
            Line::new(pins.x_axis.dir),
            Line::new(pins.x_axis.ms1),
            Line::new(pins.x_axis.ms2),
            delay,
        );
        let y_axis = A4988::new(
            Line::new(pins.y_axis.step),
            Line::new(pins.y_axis.dir),
            Line::new(pins.y_axis.ms1),
            Line::new(pins.y_axis.ms2),
            delay,
        );
        let mut gantry = Gantry::new(x_axis, y_axis);

        let table = match build_pulse_table::<NUM_CIRCLES>(&GantryConfig::DEFAULT) {
            Ok(table) => table,
            Err(e) => {
                error!("pulse table: {}", e);
                halt();
            }
        };

        // The carriage is parked at the top of the largest circle on power-up.
        match gantry.trace_circle(&table, 0, Quadrant::Top) {
            Ok(report) => info!(
                "self-test circle: {} x / {} y pulses",
                report.x_pulses, report.y_pulses
            ),
            Err(e) => error!("self-test circle: {}", e),
        }

        halt();
    }
}

#[cfg(not(target_os = "none"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    simulator::run()
}

#[cfg(not(target_os = "none"))]
mod simulator {
    use std::error::Error;

    use log::{info, LevelFilter};
    use simple_logger::SimpleLogger;

    use gantry::config::{GantryConfig, NUM_CIRCLES};
    use gantry::control::{build_pulse_table, Quadrant, BANDS};
    use gantry::motors::{Gantry, SimAxis};

    pub fn run() -> Result<(), Box<dyn Error>> {
        SimpleLogger::new().with_level(LevelFilter::Info).init()?;

        let config = GantryConfig::DEFAULT;
        let table = build_pulse_table::<NUM_CIRCLES>(&config)?;

        for circle in 0..table.len() {
            let counts = table.circle(circle).ok_or("circle missing from table")?;
            let bands: Vec<String> = BANDS
                .iter()
                .filter(|d| counts.get(d.band) > 0)
                .map(|d| format!("{:?}={}", d.band, counts.get(d.band)))
                .collect();
            info!(
                "circle {} r={}: {}",
                circle,
                table.radius(circle).unwrap_or(0),
                bands.join(" ")
            );
        }

        let mut gantry = Gantry::new(SimAxis::new(), SimAxis::new());
        for circle in 0..table.len() {
            for start in Quadrant::Top.sweep() {
                let report = gantry.trace_circle(&table, circle, start)?;
                info!(
                    "circle {} from {:?}: {} x / {} y pulses, end ({}, {})",
                    circle,
                    start,
                    report.x_pulses,
                    report.y_pulses,
                    gantry.x_axis().position(),
                    gantry.y_axis().position()
                );
            }
        }

        Ok(())
    }
}
