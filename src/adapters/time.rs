//! ESP32 time adapter.
//!
//! Provides the monotonic millisecond clock and the blocking delay the
//! monitor loop paces itself with.
//!
//! - **`target_os = "espidf"`** — wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic)
//!   and the esp-idf-hal FreeRTOS-aware delay.
//! - **`not(target_os = "espidf")`** — uses `std::time::Instant` and
//!   `std::thread::sleep` for host-side testing and simulation.

use embedded_hal::delay::DelayNs;

use crate::app::ports::ClockPort;

/// Millisecond clock for the ESP32-S3 platform.
///
/// The underlying timer counts microseconds in a u64; truncating the
/// millisecond value to u32 wraps after ~49.7 days, which interval
/// consumers handle with wrapping arithmetic.
pub struct MonotonicClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl ClockPort for MonotonicClock {
    #[cfg(target_os = "espidf")]
    fn now_ms(&self) -> u32 {
        ((unsafe { esp_idf_svc::sys::esp_timer_get_time() }) / 1_000) as u32
    }

    #[cfg(not(target_os = "espidf"))]
    fn now_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

/// Blocking delay provider for the monitor loop and sensor sampling.
///
/// On the target this defers to esp-idf-hal, which busy-waits below the
/// FreeRTOS tick threshold and yields to the scheduler above it.
pub struct LoopDelay {
    #[cfg(target_os = "espidf")]
    inner: esp_idf_hal::delay::Delay,
}

impl Default for LoopDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopDelay {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "espidf")]
            inner: esp_idf_hal::delay::Delay::new_default(),
        }
    }
}

impl DelayNs for LoopDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        self.inner.delay_ns(ns);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}
