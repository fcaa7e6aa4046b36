// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug console and `log` backend.
//!
//! [`init_logger`] hands USART1 to a global logger so every `log::info!` etc. in the crate lands on
//! the attached terminal as a CRLF-terminated line.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::cell::RefCell;
use core::fmt::{self, Write as _};

use cortex_m::interrupt::{self, Mutex};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use nb::block;

use stm32f7xx_hal::{
    pac,
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

static CONSOLE: Mutex<RefCell<Option<Usart<pac::USART1>>>> = Mutex::new(RefCell::new(None));

static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        interrupt::free(|cs| {
            if let Some(usart) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(usart, "[{:<5}] {}\r\n", record.level(), record.args());
            }
        });
    }

    fn flush(&self) {
        interrupt::free(|cs| {
            if let Some(usart) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                usart.flush();
            }
        });
    }
}

/// Route `log` output to `usart` at `level` and above.
///
/// If another logger is already installed the failure is written straight to `usart` before the
/// error is returned.
pub fn init_logger(usart: Usart<pac::USART1>, level: LevelFilter) -> Result<(), SetLoggerError> {
    interrupt::free(|cs| {
        CONSOLE.borrow(cs).replace(Some(usart));
    });

    if let Err(e) = log::set_logger(&LOGGER) {
        interrupt::free(|cs| {
            if let Some(usart) = CONSOLE.borrow(cs).borrow_mut().as_mut() {
                let _ = write!(usart, "[ERROR] console logger: {}\r\n", e);
                usart.flush();
            }
        });
        return Err(e);
    }

    log::set_max_level(level);
    Ok(())
}
