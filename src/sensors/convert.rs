//! Unit conversions for the analog front-end.
//!
//! Pure, stateless `f32` functions with a fixed operation order, so the
//! same reading always produces the same bits on every target.

/// Full-scale temperature in °C for a normalized reading of 1.0.
///
/// The LM35 outputs 10 mV/°C and the ADC maps 0 – 3.3 V onto 0.0 – 1.0,
/// so full scale corresponds to 330 °C.  The potentiometer borrows the
/// same scale to act as a temperature stand-in on the bench.
const FULL_SCALE_C: f32 = 330.0;

/// LM35 normalized reading → temperature in Celsius.
pub fn lm35_to_celsius(reading: f32) -> f32 {
    reading * FULL_SCALE_C
}

/// Celsius → Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Potentiometer normalized reading → pseudo-temperature in Celsius.
///
/// Same scale as the LM35 on purpose: the pot simulates the sensor for
/// bench tests, so the two columns stay directly comparable.
pub fn potentiometer_to_celsius(reading: f32) -> f32 {
    reading * FULL_SCALE_C
}

/// Potentiometer normalized reading → pseudo-temperature in Fahrenheit.
pub fn potentiometer_to_fahrenheit(reading: f32) -> f32 {
    celsius_to_fahrenheit(potentiometer_to_celsius(reading))
}
