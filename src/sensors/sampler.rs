//! Stable analog sampling.
//!
//! A single ADC conversion carries switching noise from the buzzer PWM
//! and the supply rail.  The monitor therefore averages a short burst of
//! raw reads with a fixed gap between them, trading ~100 ms of latency
//! per channel for a steady value.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{AnalogInput, SensorPort};
use crate::config;

/// Average [`STABLE_SAMPLE_COUNT`](config::STABLE_SAMPLE_COUNT) raw reads
/// of `input`, with a [`STABLE_SAMPLE_GAP_MS`](config::STABLE_SAMPLE_GAP_MS)
/// delay after each read.
pub fn stable_read(
    hw: &mut impl SensorPort,
    delay: &mut impl DelayNs,
    input: AnalogInput,
) -> f32 {
    let mut sum = 0.0f32;
    for _ in 0..config::STABLE_SAMPLE_COUNT {
        sum += hw.read_raw(input);
        delay.delay_ms(config::STABLE_SAMPLE_GAP_MS);
    }
    sum / config::STABLE_SAMPLE_COUNT as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SeqSensor {
        values: Vec<f32>,
        next: usize,
    }

    impl SensorPort for SeqSensor {
        fn read_raw(&mut self, _input: AnalogInput) -> f32 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }

    struct CountingDelay {
        slept_ms: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.slept_ms += ns / 1_000_000;
        }
    }

    #[test]
    fn averages_exactly_ten_reads() {
        let mut hw = SeqSensor {
            values: (1..=10).map(|i| i as f32 / 10.0).collect(),
            next: 0,
        };
        let mut delay = CountingDelay { slept_ms: 0 };

        let avg = stable_read(&mut hw, &mut delay, AnalogInput::Gas);

        // Mean of 0.1 ..= 1.0 is 0.55.
        assert!((avg - 0.55).abs() < 1e-5, "got {}", avg);
        assert_eq!(hw.next, 10, "exactly ten raw reads expected");
    }

    #[test]
    fn sleeps_the_full_sampling_window() {
        let mut hw = SeqSensor {
            values: vec![0.3],
            next: 0,
        };
        let mut delay = CountingDelay { slept_ms: 0 };

        stable_read(&mut hw, &mut delay, AnalogInput::Lm35);

        // Ten gaps of 10 ms each, including one after the final read.
        assert_eq!(delay.slept_ms, 100);
    }

    #[test]
    fn constant_input_passes_through() {
        let mut hw = SeqSensor {
            values: vec![0.25],
            next: 0,
        };
        let mut delay = CountingDelay { slept_ms: 0 };

        let avg = stable_read(&mut hw, &mut delay, AnalogInput::Potentiometer);
        assert_eq!(avg, 0.25);
    }
}
