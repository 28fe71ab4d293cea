//! UART console adapter.
//!
//! Implements [`ConsolePort`] on top of the UART1 driver installed by
//! `drivers::hw_init`.  All protocol output (summaries, alarm lines,
//! interactive echo) and all operator keystrokes flow through here;
//! the `log` facade writes to the default console UART separately.
//!
//! On non-espidf targets the underlying driver stubs make writes a
//! no-op and reads always empty, so host binaries stay inert.

use crate::app::ports::ConsolePort;
use crate::drivers::hw_init;

/// Byte-oriented serial console on UART1.
#[derive(Default)]
pub struct UartConsole;

impl UartConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsolePort for UartConsole {
    fn write_str(&mut self, s: &str) {
        hw_init::uart1_write(s.as_bytes());
    }

    fn poll_char(&mut self) -> Option<u8> {
        hw_init::uart1_read_byte()
    }
}
