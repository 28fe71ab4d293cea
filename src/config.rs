//! System tuning parameters.
//!
//! All fixed compile-time constants for the GasWatch monitor.  Thresholds
//! are deliberately not runtime-configurable: the board ships calibrated
//! for one bench setup, and a constant cannot be corrupted in the field.

// --- Alarm thresholds ---

/// Normalized gas reading above which the gas alarm latches (strict `>`).
pub const GAS_ALARM_THRESHOLD: f32 = 0.5;
/// LM35 temperature (°C) above which the temperature alarm latches (strict `>`).
pub const TEMP_ALARM_LIMIT_C: f32 = 24.0;

// --- Stable sampling ---

/// Raw samples averaged per stable analog reading.
pub const STABLE_SAMPLE_COUNT: u32 = 10;
/// Delay between consecutive raw samples (milliseconds).
pub const STABLE_SAMPLE_GAP_MS: u32 = 10;

// --- Timing ---

/// Minimum interval between periodic summary lines (milliseconds).
pub const SUMMARY_INTERVAL_MS: u32 = 1000;
/// Main loop sleep per iteration (milliseconds).
pub const LOOP_INTERVAL_MS: u32 = 200;
/// Echo cadence inside interactive console sessions (milliseconds).
pub const ECHO_INTERVAL_MS: u32 = 200;

// --- Actuators ---

/// Buzzer PWM duty while an alarm is active (0.0 – 1.0).
pub const ALARM_BUZZER_DUTY: f32 = 0.5;

// --- Console ---

/// UART console baud rate (8N1).
pub const CONSOLE_BAUD: u32 = 115_200;
