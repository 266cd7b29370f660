//! Ranging engine for SonarPing
//!
//! Drives HC-SR04 class ultrasonic sensors: fires the trigger pulse, times
//! the echo and converts the round trip into a temperature-compensated
//! distance in whole centimeters.
//!
//! Key constraints:
//! - `no_std`, no heap, no floating point in the measurement path
//! - Blocking by design; one engine owns one sensor
//! - Bad configuration is clamped, never rejected
//!
//! ```no_run
//! use sonarping_core::{RangingEngine, RangeWindow, RangingError};
//! # use core::convert::Infallible;
//! # use embedded_hal_mock::eh1::{delay::NoopDelay, digital::Mock};
//! # struct Echo;
//! # impl sonarping_core::EchoInput for Echo {
//! #     type Error = Infallible;
//! #     fn pulse_width_us(&mut self, _: u32) -> Result<Option<u32>, Infallible> { Ok(None) }
//! # }
//! # let (trigger, echo, delay) = (Mock::new(&[]), Echo, NoopDelay);
//!
//! let mut sonar = RangingEngine::with_window(trigger, echo, delay, RangeWindow::new(5, 250));
//! sonar.set_temperature(25);
//!
//! match sonar.measure() {
//!     Ok(m) => {}, // m.distance_cm
//!     Err(RangingError::Timeout { .. }) => {}, // Nothing in range
//!     Err(e) => {}, // Implausible echo or pin failure
//! }
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros; // must come first so the log macros are visible below

pub mod config;
pub mod constants;
pub mod echo;
pub mod engine;
pub mod errors;
pub mod schedule;
pub mod sound;
pub mod time;
pub mod traits;

// Public API
pub use config::{RangeWindow, RangingConfig, RejectionPolicy};
pub use constants::SONAR_NAN;
pub use echo::PolledEcho;
pub use engine::{Measurement, RangingEngine};
pub use errors::{RangingError, RangingResult};
pub use traits::{EchoInput, MicrosClock, TimeSource};

/// Crate version, reported by firmware that publishes its build identity
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
