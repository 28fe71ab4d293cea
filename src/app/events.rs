//! Outbound monitor events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these to
//! the serial console.  They are plain data here; the exact wire text
//! (CRLF line per event) lives in one place,
//! [`console::format_event`](crate::console::format_event), so tests can
//! assert on either level.

/// Serial-observable events produced by the monitoring path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonitorEvent {
    /// Gas reading crossed above the alarm threshold (edge, once).
    GasDetected,

    /// Gas reading fell back below the alarm threshold (edge, once).
    GasCleared,

    /// LM35 temperature crossed above the limit (edge, once).
    TempExceeded,

    /// LM35 temperature fell back below the limit (edge, once).
    TempNormal,

    /// Gas alarm is active — repeated every iteration while it holds.
    GasAlarmActive,

    /// Temperature alarm is active — repeated every iteration while it holds.
    TempAlarmActive,

    /// Periodic reading summary (at most once per summary interval).
    Summary {
        gas: f32,
        lm35_celsius: f32,
        potentiometer: f32,
    },
}
