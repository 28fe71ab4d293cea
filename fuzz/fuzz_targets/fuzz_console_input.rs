//! Fuzz target: `console::poll_and_dispatch`
//!
//! Drives arbitrary byte sequences into the console dispatcher and
//! asserts that it never panics and always terminates.  Enough quit
//! keys are appended that every echo session the input starts can also
//! end, so the blocking sub-loops cannot spin forever.
//!
//! cargo fuzz run fuzz_console_input

#![no_main]

use std::collections::VecDeque;

use gaswatch::app::ports::{AnalogInput, ConsolePort, SensorPort};
use gaswatch::console;
use libfuzzer_sys::fuzz_target;

struct FuzzSensor;
impl SensorPort for FuzzSensor {
    fn read_raw(&mut self, _input: AnalogInput) -> f32 {
        0.42
    }
}

struct FuzzConsole {
    pending: VecDeque<u8>,
    written: usize,
}
impl ConsolePort for FuzzConsole {
    fn write_str(&mut self, s: &str) {
        self.written += s.len();
    }
    fn poll_char(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }
}

struct NoDelay;
impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fuzz_target!(|data: &[u8]| {
    let mut pending: VecDeque<u8> = data.iter().copied().collect();
    // One quit key per input byte plus one: a session consumes at least
    // one pending byte per echo, so it must reach a quit before the
    // queue runs dry.
    for _ in 0..=data.len() {
        pending.push_back(b'q');
    }

    let mut hw = FuzzSensor;
    let mut con = FuzzConsole {
        pending,
        written: 0,
    };
    let mut delay = NoDelay;

    while !con.pending.is_empty() {
        console::poll_and_dispatch(&mut hw, &mut con, &mut delay);
    }
});
