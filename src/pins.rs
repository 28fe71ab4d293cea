//! GPIO / peripheral pin assignments for the GasWatch bench board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-2 combustible gas sensor — analog voltage via resistive divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const GAS_ADC_GPIO: i32 = 5;

/// LM35 temperature sensor — 10 mV/°C linear analog output.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const LM35_ADC_GPIO: i32 = 9;

/// Bench potentiometer — wiper straight to the ADC.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const POT_ADC_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Alarm buzzer (passive piezo via LEDC PWM)
// ---------------------------------------------------------------------------

/// LEDC PWM output driving the piezo element.
pub const BUZZER_PWM_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// Alert LED (discrete, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: blinks while any alarm is active.
pub const ALERT_LED_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// UART console (line protocol — separate from the debug log on UART0)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the buzzer (500 Hz — audible alarm tone).
pub const BUZZER_PWM_FREQ_HZ: u32 = 500;
