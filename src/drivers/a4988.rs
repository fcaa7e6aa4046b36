// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Allegro A4988 step/direction microstepping driver.
//!
//! Wiring:
//! - STEP: advances one microstep on each rising edge
//! - DIR:  sampled on the STEP rising edge
//! - MS1/MS2: microstep resolution (MS3 tied low on the gantry board)
//!
//! | MS1 | MS2 | Resolution |
//! | --- | --- | ---------- |
//! | L   | L   | full step  |
//! | H   | L   | half step  |
//! | L   | H   | quarter    |
//! | H   | H   | eighth     |
//!
//! The driver needs at least 1 µs high and 1 µs low on STEP. STEP writes return immediately; the
//! half-period wait happens in [`Axis::settle`], once per phase, so two drivers stepping together
//! see their edges back to back.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::motors::{Axis, Direction, Scale, StepLevel};

/// Wait per STEP phase, in microseconds.
pub const DEFAULT_HALF_PERIOD_US: u32 = 500;

/// A4988 bound to its STEP, DIR and MS1/MS2 lines.
pub struct A4988<STEP, DIR, MS1, MS2, D> {
    step: STEP,
    dir: DIR,
    ms1: MS1,
    ms2: MS2,
    delay: D,

    half_period_us: u32,
    invert_direction: bool,
}

impl<STEP, DIR, MS1, MS2, D, E> A4988<STEP, DIR, MS1, MS2, D>
where
    STEP: OutputPin<Error = E>,
    DIR: OutputPin<Error = E>,
    MS1: OutputPin<Error = E>,
    MS2: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Construct a driver from its control lines. No line is driven until first use.
    pub fn new(step: STEP, dir: DIR, ms1: MS1, ms2: MS2, delay: D) -> Self {
        Self {
            step,
            dir,
            ms1,
            ms2,
            delay,
            half_period_us: DEFAULT_HALF_PERIOD_US,
            invert_direction: false,
        }
    }

    /// Set the wait per STEP phase; one pulse takes twice this long.
    pub fn with_half_period_us(mut self, us: u32) -> Self {
        self.half_period_us = us;
        self
    }

    /// Swap the DIR level for motors wired in reverse.
    pub fn with_inverted_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// MS1/MS2 levels selecting `scale`.
    #[inline]
    pub fn ms_levels(scale: Scale) -> (PinState, PinState) {
        match scale {
            Scale::Whole => (PinState::Low, PinState::Low),
            Scale::Half => (PinState::High, PinState::Low),
            Scale::Quarter => (PinState::Low, PinState::High),
            Scale::Eighth => (PinState::High, PinState::High),
        }
    }

    /// Release the control lines and delay provider.
    pub fn free(self) -> (STEP, DIR, MS1, MS2, D) {
        (self.step, self.dir, self.ms1, self.ms2, self.delay)
    }
}

impl<STEP, DIR, MS1, MS2, D, E> Axis for A4988<STEP, DIR, MS1, MS2, D>
where
    STEP: OutputPin<Error = E>,
    DIR: OutputPin<Error = E>,
    MS1: OutputPin<Error = E>,
    MS2: OutputPin<Error = E>,
    D: DelayNs,
{
    type Error = E;

    fn set_direction(&mut self, direction: Direction) -> Result<(), E> {
        let high = (direction == Direction::Positive) != self.invert_direction;
        self.dir.set_state(PinState::from(high))
    }

    fn set_scale(&mut self, scale: Scale) -> Result<(), E> {
        let (ms1, ms2) = Self::ms_levels(scale);
        self.ms1.set_state(ms1)?;
        self.ms2.set_state(ms2)
    }

    fn set_step(&mut self, level: StepLevel) -> Result<(), E> {
        match level {
            StepLevel::Low => self.step.set_low(),
            StepLevel::High => self.step.set_high(),
        }
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.half_period_us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    use core::cell::RefCell;
    use core::convert::Infallible;

    use embedded_hal::digital::ErrorType;

    use crate::config::GantryConfig;
    use crate::control::{build_pulse_table, trace_circle, AxisPattern, Quadrant, BANDS};

    /// Pin write or wait, in the order it happened across every driver sharing the log.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Event {
        Pin(&'static str, bool),
        Wait(u32),
    }

    struct LogPin<'a> {
        name: &'static str,
        log: &'a RefCell<Vec<Event>>,
    }

    impl ErrorType for LogPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for LogPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Pin(self.name, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Pin(self.name, true));
            Ok(())
        }
    }

    struct LogDelay<'a> {
        log: &'a RefCell<Vec<Event>>,
    }

    impl DelayNs for LogDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::Wait(ns));
        }
    }

    type LogDriver<'a> = A4988<LogPin<'a>, LogPin<'a>, LogPin<'a>, LogPin<'a>, LogDelay<'a>>;

    fn logged<'a>(axis: [&'static str; 4], log: &'a RefCell<Vec<Event>>) -> LogDriver<'a> {
        let pin = move |name| LogPin { name, log };
        A4988::new(
            pin(axis[0]),
            pin(axis[1]),
            pin(axis[2]),
            pin(axis[3]),
            LogDelay { log },
        )
    }

    const X_PINS: [&str; 4] = ["x.step", "x.dir", "x.ms1", "x.ms2"];
    const Y_PINS: [&str; 4] = ["y.step", "y.dir", "y.ms1", "y.ms2"];

    fn pins(
        step: &[PinTransaction],
        dir: &[PinTransaction],
        ms1: &[PinTransaction],
        ms2: &[PinTransaction],
    ) -> A4988<PinMock, PinMock, PinMock, PinMock, NoopDelay> {
        A4988::new(
            PinMock::new(step),
            PinMock::new(dir),
            PinMock::new(ms1),
            PinMock::new(ms2),
            NoopDelay::new(),
        )
    }

    fn done(drv: A4988<PinMock, PinMock, PinMock, PinMock, NoopDelay>) {
        let (mut step, mut dir, mut ms1, mut ms2, _) = drv.free();
        step.done();
        dir.done();
        ms1.done();
        ms2.done();
    }

    #[test]
    fn pulse_drives_step_low_then_high() {
        let mut drv = pins(
            &[
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
            ],
            &[],
            &[],
            &[],
        );

        drv.pulse().unwrap();
        drv.pulse().unwrap();
        done(drv);
    }

    #[test]
    fn scale_selects_ms_lines() {
        let mut drv = pins(
            &[],
            &[],
            &[
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
            ],
            &[
                PinTransaction::set(State::Low),
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
                PinTransaction::set(State::High),
            ],
        );

        drv.set_scale(Scale::Whole).unwrap();
        drv.set_scale(Scale::Half).unwrap();
        drv.set_scale(Scale::Quarter).unwrap();
        drv.set_scale(Scale::Eighth).unwrap();
        done(drv);
    }

    #[test]
    fn direction_respects_inversion() {
        let mut drv = pins(
            &[],
            &[
                PinTransaction::set(State::High),
                PinTransaction::set(State::Low),
            ],
            &[],
            &[],
        );
        drv.set_direction(Direction::Positive).unwrap();
        drv.set_direction(Direction::Negative).unwrap();
        done(drv);

        let mut drv = pins(
            &[],
            &[
                PinTransaction::set(State::Low),
                PinTransaction::set(State::High),
            ],
            &[],
            &[],
        )
        .with_inverted_direction(true);
        drv.set_direction(Direction::Positive).unwrap();
        drv.set_direction(Direction::Negative).unwrap();
        done(drv);
    }

    #[test]
    fn pulse_waits_once_per_phase() {
        let log = RefCell::new(Vec::new());
        let mut drv = logged(X_PINS, &log).with_half_period_us(250);

        drv.pulse().unwrap();

        assert_eq!(
            log.into_inner(),
            [
                Event::Pin("x.step", false),
                Event::Wait(250_000),
                Event::Pin("x.step", true),
                Event::Wait(250_000),
            ]
        );
    }

    #[test]
    fn diagonal_rising_edges_are_back_to_back() {
        let table = build_pulse_table::<5>(&GantryConfig::DEFAULT).unwrap();
        let log = RefCell::new(Vec::new());
        let mut x = logged(X_PINS, &log);
        let mut y = logged(Y_PINS, &log);

        let report = trace_circle(&mut x, &mut y, &table, 4, Quadrant::Top).unwrap();

        let steps: Vec<Event> = log
            .into_inner()
            .into_iter()
            .filter(|e| matches!(e, Event::Wait(_) | Event::Pin("x.step" | "y.step", _)))
            .collect();

        // Each wait closes one phase: one or two STEP writes at the same level, on distinct lines.
        let mut phases: Vec<&[Event]> = steps.split(|e| matches!(e, Event::Wait(_))).collect();
        assert_eq!(phases.pop(), Some(&[][..]));
        assert_eq!(steps.last(), Some(&Event::Wait(DEFAULT_HALF_PERIOD_US * 1000)));

        let mut together = 0u32;
        for phase in &phases {
            assert!(!phase.is_empty() && phase.len() <= 2, "{:?}", phase);
            if let [Event::Pin(a, la), Event::Pin(b, lb)] = phase {
                assert_ne!(a, b);
                assert_eq!(la, lb);
                together += 1;
            }
        }

        let counts = table.circle(4).unwrap();
        let diagonal: u32 = BANDS
            .iter()
            .filter(|d| d.pattern == AxisPattern::Diagonal)
            .map(|d| 4 * counts.get(d.band))
            .sum();
        assert!(diagonal > 0);
        assert_eq!(together, 2 * diagonal);
        assert_eq!(
            phases.len(),
            2 * (report.x_pulses + report.y_pulses - diagonal) as usize
        );
    }
}
