//! Alarm buzzer driver (passive piezo on LEDC PWM).
//!
//! The LEDC timer runs at a fixed 500 Hz; loudness is set by duty cycle,
//! with 0.5 giving the square-wave alarm tone.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real LEDC channel via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

pub struct Buzzer {
    duty: f32,
}

impl Default for Buzzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buzzer {
    pub fn new() -> Self {
        Self { duty: 0.0 }
    }

    /// Set PWM duty in 0.0 – 1.0.  Out-of-range values are clamped.
    pub fn set_duty(&mut self, duty: f32) {
        let duty = duty.clamp(0.0, 1.0);
        self.set_duty_hw(duty);
        self.duty = duty;
    }

    pub fn off(&mut self) {
        self.set_duty(0.0);
    }

    fn set_duty_hw(&self, duty: f32) {
        let duty_8bit = (duty * 255.0) as u8;
        hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, duty_8bit);
    }

    pub fn current_duty(&self) -> f32 {
        self.duty
    }
}
