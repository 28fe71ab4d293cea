//! Periodic reading summary.
//!
//! Emits one [`MonitorEvent::Summary`] line at most once per
//! [`SUMMARY_INTERVAL_MS`](config::SUMMARY_INTERVAL_MS).  The gate is
//! evaluated once per monitor iteration, so the real period is the first
//! iteration boundary at or after one second.

use crate::app::events::MonitorEvent;
use crate::config;
use crate::sensors::SensorSnapshot;

/// Time-gated summary emitter.
pub struct Reporter {
    last_print_ms: u32,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self { last_print_ms: 0 }
    }

    /// `Some(summary)` when the interval has elapsed since the last
    /// emission.  Wrapping arithmetic keeps the gate correct across u32
    /// millisecond rollover (~49.7 days of uptime).
    pub fn tick(&mut self, now_ms: u32, snap: &SensorSnapshot) -> Option<MonitorEvent> {
        if now_ms.wrapping_sub(self.last_print_ms) >= config::SUMMARY_INTERVAL_MS {
            self.last_print_ms = now_ms;
            Some(MonitorEvent::Summary {
                gas: snap.gas_reading,
                lm35_celsius: snap.lm35_celsius,
                potentiometer: snap.pot_reading,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> SensorSnapshot {
        SensorSnapshot {
            gas_reading: 0.2,
            lm35_reading: 0.1,
            lm35_celsius: 33.0,
            pot_reading: 0.7,
        }
    }

    #[test]
    fn gates_on_the_full_interval() {
        let mut rep = Reporter::new();
        assert!(rep.tick(200, &snap()).is_none());
        assert!(rep.tick(800, &snap()).is_none());
        assert!(rep.tick(999, &snap()).is_none());
        assert!(rep.tick(1000, &snap()).is_some());
        // Interval restarts from the emission time.
        assert!(rep.tick(1500, &snap()).is_none());
        assert!(rep.tick(2000, &snap()).is_some());
    }

    #[test]
    fn emits_every_fifth_iteration_at_loop_cadence() {
        // 200 ms per iteration: summaries land on iterations 5, 10, 15.
        let mut rep = Reporter::new();
        let mut emitted = Vec::new();
        for i in 1..=15u32 {
            if rep.tick(i * 200, &snap()).is_some() {
                emitted.push(i);
            }
        }
        assert_eq!(emitted, vec![5, 10, 15]);
    }

    #[test]
    fn survives_clock_wraparound() {
        let mut rep = Reporter::new();
        // Last emission just before rollover.
        assert!(rep.tick(u32::MAX - 200, &snap()).is_some());
        // 251 ms after the emission, 50 ms past the wrap: not yet due.
        assert!(rep.tick(50, &snap()).is_none());
        // 1100 ms after the emission, 899 ms past the wrap: due.
        assert!(rep.tick(899, &snap()).is_some());
    }

    #[test]
    fn summary_carries_the_snapshot_values() {
        let mut rep = Reporter::new();
        let event = rep.tick(5000, &snap());
        assert_eq!(
            event,
            Some(MonitorEvent::Summary {
                gas: 0.2,
                lm35_celsius: 33.0,
                potentiometer: 0.7,
            })
        );
    }
}
