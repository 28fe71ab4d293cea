//! GasWatch Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-cadence monitor loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter    UartConsole    MonotonicClock        │
//! │  (Sensor+Actuator)  (ConsolePort)  (ClockPort)           │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           MonitorService (pure logic)          │      │
//! │  │  Sampler · Alert · Reporter · Dispatcher       │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use gaswatch::adapters::console::UartConsole;
use gaswatch::adapters::hardware::HardwareAdapter;
use gaswatch::adapters::time::{LoopDelay, MonotonicClock};
use gaswatch::app::service::MonitorService;
use gaswatch::drivers::buzzer::Buzzer;
use gaswatch::drivers::hw_init;
use gaswatch::drivers::status_led::StatusLed;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  GasWatch v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(Buzzer::new(), StatusLed::new());
    let mut console = UartConsole::new();
    let clock = MonotonicClock::new();
    let mut delay = LoopDelay::new();

    // ── 4. Construct the monitor service ──────────────────────
    let mut service = MonitorService::new();
    service.start(&mut console);

    info!("System ready. Entering monitor loop.");

    // ── 5. Monitor loop ───────────────────────────────────────
    loop {
        service.tick(&mut hw, &mut console, &clock, &mut delay);
    }
}
