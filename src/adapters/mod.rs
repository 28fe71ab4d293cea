//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements        | Connects to            |
//! |------------|-------------------|------------------------|
//! | `hardware` | SensorPort        | ESP32 ADC1 oneshot     |
//! |            | ActuatorPort      | ESP32 LEDC PWM, GPIO   |
//! | `console`  | ConsolePort       | UART1 byte I/O         |
//! | `time`     | ClockPort, DelayNs| ESP32 system timer     |

pub mod console;
pub mod hardware;
pub mod time;
