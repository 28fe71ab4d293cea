//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the actuator drivers and the ADC front-end, exposing them
//! through [`SensorPort`] and [`ActuatorPort`].  This is the only
//! module besides `drivers::hw_init` that reaches real hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ActuatorPort, AnalogInput, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::hw_init;
use crate::drivers::status_led::StatusLed;

/// Full scale of one 12-bit ADC conversion.
const ADC_MAX: f32 = 4095.0;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    buzzer: Buzzer,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new(buzzer: Buzzer, led: StatusLed) -> Self {
        Self { buzzer, led }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_raw(&mut self, input: AnalogInput) -> f32 {
        let channel = match input {
            AnalogInput::Gas => hw_init::ADC1_CH_GAS,
            AnalogInput::Lm35 => hw_init::ADC1_CH_LM35,
            AnalogInput::Potentiometer => hw_init::ADC1_CH_POT,
        };
        f32::from(hw_init::adc1_read(channel)) / ADC_MAX
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_buzzer_duty(&mut self, duty: f32) {
        self.buzzer.set_duty(duty);
    }

    fn set_led(&mut self, on: bool) {
        self.led.set(on);
    }

    fn all_off(&mut self) {
        self.buzzer.off();
        self.led.off();
    }
}
