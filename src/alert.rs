//! Alarm supervision for the gas and temperature channels.
//!
//! The monitor runs **every iteration after sampling** and keeps one
//! latched flag per alarm source.  Two kinds of output derive from the
//! flags:
//!
//! 1. **Edge messages** — exactly one per transition, in either
//!    direction ("Gas detected!" / "Gas no longer detected.").
//! 2. **Level messages + actuators** — while any flag is Active, the
//!    buzzer runs at the alarm duty, the alert LED toggles once per
//!    iteration, and one "... Alarm" line per active source is repeated
//!    every iteration.
//!
//! Steady state in either direction produces no edge output.  Flags for
//! the two sources are fully independent.

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::config;

/// One alarm source's latched state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    Inactive,
    Active,
}

/// Buzzer/LED decision for one iteration, applied by the service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorCommand {
    /// Buzzer PWM duty (0.0 = silent).
    pub buzzer_duty: f32,
    /// Alert LED level for this iteration.
    pub led_on: bool,
}

/// Alarm supervisor.
pub struct AlertMonitor {
    gas: AlarmState,
    temp: AlarmState,
    /// Current LED level; flipped each iteration while any alarm holds.
    led_on: bool,
}

impl Default for AlertMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertMonitor {
    pub fn new() -> Self {
        Self {
            gas: AlarmState::Inactive,
            temp: AlarmState::Inactive,
            led_on: false,
        }
    }

    /// Update the gas flag from the latest stable reading.
    /// Returns the edge event when the flag transitions, `None` otherwise.
    pub fn eval_gas(&mut self, reading: f32) -> Option<MonitorEvent> {
        let active = reading > config::GAS_ALARM_THRESHOLD;
        let edge = match (self.gas, active) {
            (AlarmState::Inactive, true) => {
                warn!("ALARM SET: gas (reading {:.2})", reading);
                Some(MonitorEvent::GasDetected)
            }
            (AlarmState::Active, false) => {
                info!("ALARM CLEARED: gas");
                Some(MonitorEvent::GasCleared)
            }
            _ => None,
        };
        self.gas = if active {
            AlarmState::Active
        } else {
            AlarmState::Inactive
        };
        edge
    }

    /// Update the temperature flag from the latest derived °C value.
    /// Returns the edge event when the flag transitions, `None` otherwise.
    pub fn eval_temperature(&mut self, celsius: f32) -> Option<MonitorEvent> {
        let active = celsius > config::TEMP_ALARM_LIMIT_C;
        let edge = match (self.temp, active) {
            (AlarmState::Inactive, true) => {
                warn!("ALARM SET: temperature ({:.2} \u{00b0}C)", celsius);
                Some(MonitorEvent::TempExceeded)
            }
            (AlarmState::Active, false) => {
                info!("ALARM CLEARED: temperature");
                Some(MonitorEvent::TempNormal)
            }
            _ => None,
        };
        self.temp = if active {
            AlarmState::Active
        } else {
            AlarmState::Inactive
        };
        edge
    }

    /// Buzzer/LED policy for the current flags.  While any alarm is
    /// active the LED toggles, so its blink rate is coupled to the
    /// iteration rate by design.  Called exactly once per iteration.
    pub fn drive(&mut self) -> ActuatorCommand {
        if self.any_active() {
            self.led_on = !self.led_on;
            ActuatorCommand {
                buzzer_duty: config::ALARM_BUZZER_DUTY,
                led_on: self.led_on,
            }
        } else {
            self.led_on = false;
            ActuatorCommand {
                buzzer_duty: 0.0,
                led_on: false,
            }
        }
    }

    pub fn gas_active(&self) -> bool {
        self.gas == AlarmState::Active
    }

    pub fn temp_active(&self) -> bool {
        self.temp == AlarmState::Active
    }

    /// True if **any** alarm is active.
    pub fn any_active(&self) -> bool {
        self.gas_active() || self.temp_active()
    }
}
