//! Sensor subsystem — stable sampling, unit conversion, and the
//! per-iteration [`SensorSnapshot`].

pub mod convert;
pub mod sampler;

use embedded_hal::delay::DelayNs;

use crate::app::ports::{AnalogInput, SensorPort};

/// A point-in-time snapshot of every analog channel, recomputed once per
/// monitor iteration.  Derived values are never cached across iterations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorSnapshot {
    /// Stable gas reading, normalized 0.0 – 1.0.
    pub gas_reading: f32,
    /// Stable raw LM35 reading, normalized 0.0 – 1.0.
    pub lm35_reading: f32,
    /// LM35 reading converted to °C.
    pub lm35_celsius: f32,
    /// Stable potentiometer reading, normalized 0.0 – 1.0.
    pub pot_reading: f32,
}

/// Stable-read every channel in a fixed order (gas, LM35, potentiometer)
/// and derive the Celsius temperature.  Takes ~300 ms of sampling delays.
pub fn read_snapshot(hw: &mut impl SensorPort, delay: &mut impl DelayNs) -> SensorSnapshot {
    let gas_reading = sampler::stable_read(hw, delay, AnalogInput::Gas);
    let lm35_reading = sampler::stable_read(hw, delay, AnalogInput::Lm35);
    let lm35_celsius = convert::lm35_to_celsius(lm35_reading);
    let pot_reading = sampler::stable_read(hw, delay, AnalogInput::Potentiometer);

    SensorSnapshot {
        gas_reading,
        lm35_reading,
        lm35_celsius,
        pot_reading,
    }
}
