//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the alarm supervisor, the reporter, and the
//! latest sensor snapshot.  All I/O flows through port traits injected
//! at call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌────────────────────────┐ ──▶ ConsolePort
//!                  │     MonitorService      │
//!  ActuatorPort ◀──│  Sampler·Alert·Report   │
//!                  └────────────────────────┘
//! ```
//!
//! One iteration has a fixed internal order: sample → alarm edges →
//! summary → actuator drive → level lines → console dispatch → sleep.

use embedded_hal::delay::DelayNs;
use log::info;

use crate::alert::AlertMonitor;
use crate::app::events::MonitorEvent;
use crate::app::ports::{ActuatorPort, ClockPort, ConsolePort, SensorPort};
use crate::config;
use crate::console;
use crate::report::Reporter;
use crate::sensors::{self, SensorSnapshot};

/// The monitor service orchestrates all domain logic.
pub struct MonitorService {
    alert: AlertMonitor,
    reporter: Reporter,
    snapshot: SensorSnapshot,
    iterations: u64,
}

impl Default for MonitorService {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorService {
    pub fn new() -> Self {
        Self {
            alert: AlertMonitor::new(),
            reporter: Reporter::new(),
            snapshot: SensorSnapshot::default(),
            iterations: 0,
        }
    }

    /// Emit the startup banner.  Call once before the first iteration.
    pub fn start(&mut self, console: &mut impl ConsolePort) {
        console::write_banner(console);
        info!("monitor started");
    }

    /// One monitoring pass: stable-sample every channel, update the
    /// alarm flags, emit due protocol lines, drive the actuators.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn check_sensors(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        console: &mut impl ConsolePort,
        clock: &impl ClockPort,
        delay: &mut impl DelayNs,
    ) {
        self.iterations += 1;

        // 1. Stable readings for every channel (gas, LM35, pot).
        let snap = sensors::read_snapshot(hw, delay);
        self.snapshot = snap;

        // 2. Edge messages, gas first.
        if let Some(edge) = self.alert.eval_gas(snap.gas_reading) {
            console.write_str(&console::format_event(&edge));
        }
        if let Some(edge) = self.alert.eval_temperature(snap.lm35_celsius) {
            console.write_str(&console::format_event(&edge));
        }

        // 3. Periodic summary, time-gated.
        if let Some(summary) = self.reporter.tick(clock.now_ms(), &snap) {
            console.write_str(&console::format_event(&summary));
        }

        // 4. Actuators, then the level lines for every active alarm.
        let cmd = self.alert.drive();
        hw.set_buzzer_duty(cmd.buzzer_duty);
        hw.set_led(cmd.led_on);
        if self.alert.gas_active() {
            console.write_str(&console::format_event(&MonitorEvent::GasAlarmActive));
        }
        if self.alert.temp_active() {
            console.write_str(&console::format_event(&MonitorEvent::TempAlarmActive));
        }
    }

    /// One full loop iteration: sensors, console commands, fixed sleep.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        console: &mut impl ConsolePort,
        clock: &impl ClockPort,
        delay: &mut impl DelayNs,
    ) {
        self.check_sensors(hw, console, clock, delay);
        console::poll_and_dispatch(hw, console, delay);
        delay.delay_ms(config::LOOP_INTERVAL_MS);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Latest sensor snapshot (from the most recent `check_sensors`).
    pub fn snapshot(&self) -> SensorSnapshot {
        self.snapshot
    }

    /// Total monitor iterations executed since startup.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_service_has_no_history() {
        let service = MonitorService::new();
        assert_eq!(service.iterations(), 0);
        assert_eq!(service.snapshot(), SensorSnapshot::default());
    }
}
