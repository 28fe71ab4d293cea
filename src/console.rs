//! Serial console — command dispatch and the exact line protocol.
//!
//! One pending byte is polled per monitor iteration.  A recognized
//! command letter enters a **blocking echo session**: single raw reads
//! (not the stabilized average) printed at a fixed cadence until `q` or
//! `Q` arrives.  The whole monitor loop pauses for the duration — the
//! sessions are bench diagnostics and that pause is part of the
//! protocol.  Inside a session, pending bytes other than the quit key
//! are consumed and ignored; at the top level, unrecognized bytes are
//! ignored without entering a session.
//!
//! Every protocol line this firmware ever emits is rendered here, CRLF
//! terminated, so the wire format has a single home.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use heapless::String;
use log::{debug, info};

use crate::app::events::MonitorEvent;
use crate::app::ports::{AnalogInput, ConsolePort, SensorPort};
use crate::config;
use crate::sensors::convert;

/// One formatted protocol line.  Capacity covers the widest summary line
/// with generous slack for out-of-range readings.
pub type Line = String<160>;

// ───────────────────────────────────────────────────────────────
// Commands
// ───────────────────────────────────────────────────────────────

/// Interactive console commands, one letter each (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `a` — raw potentiometer reading.
    PotentiometerRaw,
    /// `b` — raw LM35 reading.
    Lm35Raw,
    /// `c` — LM35 temperature in Celsius.
    Lm35Celsius,
    /// `d` — LM35 temperature in Fahrenheit.
    Lm35Fahrenheit,
    /// `e` — LM35 and potentiometer, both as Celsius.
    BothCelsius,
    /// `f` — LM35 and potentiometer, both as Fahrenheit.
    BothFahrenheit,
}

impl Command {
    /// Map a received byte to a command.  `None` for everything else,
    /// including the quit key (which only means something *inside* a
    /// session).
    pub fn from_char(c: u8) -> Option<Self> {
        match c {
            b'a' | b'A' => Some(Self::PotentiometerRaw),
            b'b' | b'B' => Some(Self::Lm35Raw),
            b'c' | b'C' => Some(Self::Lm35Celsius),
            b'd' | b'D' => Some(Self::Lm35Fahrenheit),
            b'e' | b'E' => Some(Self::BothCelsius),
            b'f' | b'F' => Some(Self::BothFahrenheit),
            _ => None,
        }
    }
}

fn is_quit(c: u8) -> bool {
    matches!(c, b'q' | b'Q')
}

// ───────────────────────────────────────────────────────────────
// Dispatch
// ───────────────────────────────────────────────────────────────

/// Poll for one pending console byte and act on it.  No pending byte is
/// a no-op; a command letter blocks in its echo session until quit.
pub fn poll_and_dispatch(
    hw: &mut impl SensorPort,
    console: &mut impl ConsolePort,
    delay: &mut impl DelayNs,
) {
    let Some(c) = console.poll_char() else {
        return;
    };
    match Command::from_char(c) {
        Some(cmd) => run_session(cmd, hw, console, delay),
        None => debug!("console: ignoring byte 0x{:02x}", c),
    }
}

/// Blocking echo session for one command: single raw read(s), one line,
/// fixed delay, then poll for the quit key.  The body runs at least once.
fn run_session(
    cmd: Command,
    hw: &mut impl SensorPort,
    console: &mut impl ConsolePort,
    delay: &mut impl DelayNs,
) {
    info!("console: {:?} session started", cmd);
    loop {
        let mut line = Line::new();
        let _ = match cmd {
            Command::PotentiometerRaw => {
                let v = hw.read_raw(AnalogInput::Potentiometer);
                write!(line, "Potentiometer reading: {:.2}\r\n", v)
            }
            Command::Lm35Raw => {
                let v = hw.read_raw(AnalogInput::Lm35);
                write!(line, "LM35 reading: {:.2}\r\n", v)
            }
            Command::Lm35Celsius => {
                let c = convert::lm35_to_celsius(hw.read_raw(AnalogInput::Lm35));
                write!(line, "LM35: {:.2} \u{00b0}C\r\n", c)
            }
            Command::Lm35Fahrenheit => {
                let c = convert::lm35_to_celsius(hw.read_raw(AnalogInput::Lm35));
                let f = convert::celsius_to_fahrenheit(c);
                write!(line, "LM35: {:.2} \u{00b0}F\r\n", f)
            }
            Command::BothCelsius => {
                // Potentiometer first, then LM35 — fixed read order.
                let pot_c =
                    convert::potentiometer_to_celsius(hw.read_raw(AnalogInput::Potentiometer));
                let lm_c = convert::lm35_to_celsius(hw.read_raw(AnalogInput::Lm35));
                write!(
                    line,
                    "LM35: {:.2} \u{00b0}C, Potentiometer scaled to \u{00b0}C: {:.2}\r\n",
                    lm_c, pot_c
                )
            }
            Command::BothFahrenheit => {
                let pot_f =
                    convert::potentiometer_to_fahrenheit(hw.read_raw(AnalogInput::Potentiometer));
                let lm_c = convert::lm35_to_celsius(hw.read_raw(AnalogInput::Lm35));
                let lm_f = convert::celsius_to_fahrenheit(lm_c);
                write!(
                    line,
                    "LM35: {:.2} \u{00b0}F, Potentiometer scaled to \u{00b0}F: {:.2}\r\n",
                    lm_f, pot_f
                )
            }
        };
        console.write_str(&line);

        delay.delay_ms(config::ECHO_INTERVAL_MS);

        if let Some(c) = console.poll_char() {
            if is_quit(c) {
                break;
            }
        }
    }
    info!("console: session ended");
}

// ───────────────────────────────────────────────────────────────
// Wire rendering
// ───────────────────────────────────────────────────────────────

/// Render a monitor event to its exact protocol line.
pub fn format_event(event: &MonitorEvent) -> Line {
    let mut line = Line::new();
    let _ = match event {
        MonitorEvent::GasDetected => write!(line, "Gas detected!\r\n"),
        MonitorEvent::GasCleared => write!(line, "Gas no longer detected.\r\n"),
        MonitorEvent::TempExceeded => write!(
            line,
            "ALERT: LM35 temperature exceeds {:.0}\u{00b0}C!\r\n",
            config::TEMP_ALARM_LIMIT_C
        ),
        MonitorEvent::TempNormal => write!(
            line,
            "LM35 temperature below {:.0}\u{00b0}C.\r\n",
            config::TEMP_ALARM_LIMIT_C
        ),
        MonitorEvent::GasAlarmActive => write!(line, "Gas Alarm\r\n"),
        MonitorEvent::TempAlarmActive => write!(line, "Temperature Alarm\r\n"),
        MonitorEvent::Summary {
            gas,
            lm35_celsius,
            potentiometer,
        } => write!(
            line,
            "Gas: {:.2}, LM35: {:.2} C, Potentiometer: {:.2}\r\n",
            gas, lm35_celsius, potentiometer
        ),
    };
    line
}

/// Startup help banner listing every interactive command.
pub fn write_banner(console: &mut impl ConsolePort) {
    console.write_str("\r\nPress the following keys to continuously ");
    console.write_str("print the readings until 'q' is pressed:\r\n");
    console.write_str(" - 'a' the raw potentiometer reading\r\n");
    console.write_str(" - 'b' the raw LM35 reading\r\n");
    console.write_str(" - 'c' the temperature in Celsius from LM35\r\n");
    console.write_str(" - 'd' the temperature in Fahrenheit from LM35\r\n");
    console.write_str(" - 'e' both LM35 in Celsius and potentiometer value in Celsius\r\n");
    console.write_str(" - 'f' both LM35 in Fahrenheit and potentiometer value in Fahrenheit\r\n");
    console.write_str("\r\nWARNING: Press 'q' or 'Q' to stop.\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct FixedSensor {
        pot: f32,
        lm35: f32,
        reads: Vec<AnalogInput>,
    }

    impl FixedSensor {
        fn new(pot: f32, lm35: f32) -> Self {
            Self {
                pot,
                lm35,
                reads: Vec::new(),
            }
        }
    }

    impl SensorPort for FixedSensor {
        fn read_raw(&mut self, input: AnalogInput) -> f32 {
            self.reads.push(input);
            match input {
                AnalogInput::Gas => 0.0,
                AnalogInput::Lm35 => self.lm35,
                AnalogInput::Potentiometer => self.pot,
            }
        }
    }

    struct ScriptedConsole {
        pending: VecDeque<u8>,
        out: std::string::String,
    }

    impl ScriptedConsole {
        fn new(pending: &[u8]) -> Self {
            Self {
                pending: pending.iter().copied().collect(),
                out: std::string::String::new(),
            }
        }
    }

    impl ConsolePort for ScriptedConsole {
        fn write_str(&mut self, s: &str) {
            self.out.push_str(s);
        }
        fn poll_char(&mut self) -> Option<u8> {
            self.pending.pop_front()
        }
    }

    struct NoDelay;
    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn from_char_maps_both_cases() {
        for (lower, upper, cmd) in [
            (b'a', b'A', Command::PotentiometerRaw),
            (b'b', b'B', Command::Lm35Raw),
            (b'c', b'C', Command::Lm35Celsius),
            (b'd', b'D', Command::Lm35Fahrenheit),
            (b'e', b'E', Command::BothCelsius),
            (b'f', b'F', Command::BothFahrenheit),
        ] {
            assert_eq!(Command::from_char(lower), Some(cmd));
            assert_eq!(Command::from_char(upper), Some(cmd));
        }
        assert_eq!(Command::from_char(b'g'), None);
        assert_eq!(Command::from_char(b'q'), None);
        assert_eq!(Command::from_char(b'\r'), None);
        assert_eq!(Command::from_char(0x00), None);
    }

    #[test]
    fn event_lines_match_the_wire_format() {
        assert_eq!(
            format_event(&MonitorEvent::GasDetected).as_str(),
            "Gas detected!\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::GasCleared).as_str(),
            "Gas no longer detected.\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::TempExceeded).as_str(),
            "ALERT: LM35 temperature exceeds 24\u{00b0}C!\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::TempNormal).as_str(),
            "LM35 temperature below 24\u{00b0}C.\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::GasAlarmActive).as_str(),
            "Gas Alarm\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::TempAlarmActive).as_str(),
            "Temperature Alarm\r\n"
        );
        assert_eq!(
            format_event(&MonitorEvent::Summary {
                gas: 0.55,
                lm35_celsius: 23.1,
                potentiometer: 0.33,
            })
            .as_str(),
            "Gas: 0.55, LM35: 23.10 C, Potentiometer: 0.33\r\n"
        );
    }

    #[test]
    fn no_pending_byte_is_a_noop() {
        let mut hw = FixedSensor::new(0.4, 0.1);
        let mut console = ScriptedConsole::new(&[]);
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert!(console.out.is_empty());
        assert!(hw.reads.is_empty());
    }

    #[test]
    fn unrecognized_byte_is_ignored() {
        let mut hw = FixedSensor::new(0.4, 0.1);
        let mut console = ScriptedConsole::new(b"z");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert!(console.out.is_empty());
        assert!(hw.reads.is_empty());
    }

    #[test]
    fn celsius_session_prints_then_quits() {
        let mut hw = FixedSensor::new(0.0, 0.1);
        let mut console = ScriptedConsole::new(b"cq");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert_eq!(console.out, "LM35: 33.00 \u{00b0}C\r\n");
        // One single read, not a stabilized average.
        assert_eq!(hw.reads, vec![AnalogInput::Lm35]);
    }

    #[test]
    fn session_ignores_other_bytes_until_quit() {
        let mut hw = FixedSensor::new(0.25, 0.0);
        // 'x' is consumed mid-session without ending it, so two lines print.
        let mut console = ScriptedConsole::new(b"axq");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert_eq!(
            console.out,
            "Potentiometer reading: 0.25\r\nPotentiometer reading: 0.25\r\n"
        );
    }

    #[test]
    fn uppercase_quit_ends_a_session() {
        let mut hw = FixedSensor::new(0.0, 0.2);
        let mut console = ScriptedConsole::new(b"BQ");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert_eq!(console.out, "LM35 reading: 0.20\r\n");
    }

    #[test]
    fn fahrenheit_session_converts() {
        let mut hw = FixedSensor::new(0.0, 0.1);
        let mut console = ScriptedConsole::new(b"dq");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        // 33 °C → 91.4 °F.
        assert_eq!(console.out, "LM35: 91.40 \u{00b0}F\r\n");
    }

    #[test]
    fn both_celsius_reads_pot_before_lm35() {
        let mut hw = FixedSensor::new(0.2, 0.1);
        let mut console = ScriptedConsole::new(b"eq");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        assert_eq!(
            hw.reads,
            vec![AnalogInput::Potentiometer, AnalogInput::Lm35]
        );
        assert_eq!(
            console.out,
            "LM35: 33.00 \u{00b0}C, Potentiometer scaled to \u{00b0}C: 66.00\r\n"
        );
    }

    #[test]
    fn both_fahrenheit_line() {
        let mut hw = FixedSensor::new(0.2, 0.1);
        let mut console = ScriptedConsole::new(b"fq");
        poll_and_dispatch(&mut hw, &mut console, &mut NoDelay);
        // 33 °C → 91.4 °F; 66 °C → 150.8 °F.
        assert_eq!(
            console.out,
            "LM35: 91.40 \u{00b0}F, Potentiometer scaled to \u{00b0}F: 150.80\r\n"
        );
    }

    #[test]
    fn banner_lists_every_command_and_the_quit_key() {
        let mut console = ScriptedConsole::new(&[]);
        write_banner(&mut console);
        for key in ["'a'", "'b'", "'c'", "'d'", "'e'", "'f'"] {
            assert!(console.out.contains(key), "banner missing {}", key);
        }
        assert!(console.out.contains("WARNING: Press 'q' or 'Q' to stop."));
        assert!(console.out.ends_with("\r\n"));
    }
}
