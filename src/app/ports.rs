//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (ADC front-end, buzzer/LED, UART console, timer)
//! implement these traits.  The
//! [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! Blocking delays are not a port of their own — the service takes
//! [`embedded_hal::delay::DelayNs`] directly, the standard trait every
//! HAL already implements.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Identifies one analog input channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogInput {
    /// MQ-2 combustible gas sensor.
    Gas,
    /// LM35 temperature sensor.
    Lm35,
    /// Bench potentiometer.
    Potentiometer,
}

/// Read-side port: the domain calls this to sample the analog front-end.
pub trait SensorPort {
    /// One raw conversion of the given channel, normalized to 0.0 – 1.0
    /// of full scale.  A single read is noisy; callers that need a stable
    /// value go through [`sensors::sampler`](crate::sensors::sampler).
    fn read_raw(&mut self, input: AnalogInput) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the alarm outputs.
pub trait ActuatorPort {
    /// Set the buzzer PWM duty (0.0 = silent, 0.5 = alarm tone).
    fn set_buzzer_duty(&mut self, duty: f32);

    /// Set the alert LED level.
    fn set_led(&mut self, on: bool);

    /// Kill buzzer and LED — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Console port (driven adapter: domain ↔ serial line protocol)
// ───────────────────────────────────────────────────────────────

/// Byte-level serial console.  Every protocol line (summaries, alarm
/// messages, interactive echo) goes out through this port verbatim;
/// the debug log uses the `log` facade on a separate UART instead.
pub trait ConsolePort {
    /// Write a string to the console, blocking until queued.
    fn write_str(&mut self, s: &str);

    /// Non-blocking read of one pending byte.  `None` means nothing is
    /// waiting — a normal condition, not an error.
    fn poll_char(&mut self) -> Option<u8>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
pub trait ClockPort {
    /// Milliseconds since boot.  Wraps at `u32::MAX`; consumers must use
    /// wrapping arithmetic for interval checks.
    fn now_ms(&self) -> u32;
}
