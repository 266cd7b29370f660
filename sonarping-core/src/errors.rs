//! Error Types for Ranging Failures
//!
//! ## Design Philosophy
//!
//! An ultrasonic sensor has only two ways to fail in normal operation:
//! the echo never arrives, or it arrives from somewhere implausible. Both
//! are expected, soft failures. The caller skips the sample and tries again
//! on the next scheduled measurement.
//!
//! 1. **Small Size**: Every variant carries a few integers at most, so a
//!    `RangingResult` is cheap to return from the measurement hot path.
//!
//! 2. **No Heap Allocation**: No strings, no boxing. Errors are `Copy`.
//!
//! 3. **Actionable Information**: Rejections carry the value and the window
//!    they were checked against, so a log line explains itself.
//!
//! ## Error Categories
//!
//! ### No Reading
//! - `Timeout`: no complete echo pulse before the deadline
//!
//! ### Implausible Reading
//! - `OutOfWindow`: converted distance outside `[min, max]`
//! - `RoundTripOutOfWindow`: raw round trip outside the time-domain window
//!   (only with [`RejectionPolicy::RoundTripTime`](crate::config::RejectionPolicy))
//!
//! ### Hardware
//! - `Pin`: the HAL reported a GPIO failure
//!
//! ## Sentinel Compatibility
//!
//! Firmware following the Arduino NewPing convention reports every
//! failure as distance `0`. Use
//! [`RangingEngine::get_distance`](crate::engine::RangingEngine::get_distance)
//! or [`sentinel_or_distance`] to collapse a result to that form.
//!
//! ```rust
//! use sonarping_core::{RangingError, errors::sentinel_or_distance};
//!
//! let missed: Result<u16, RangingError> = Err(RangingError::Timeout { timeout_us: 30_000 });
//! assert_eq!(sentinel_or_distance(missed), 0);
//! assert_eq!(sentinel_or_distance(Ok(42)), 42);
//! ```

use embedded_hal::digital::ErrorKind;
use thiserror_no_std::Error;

use crate::constants::SONAR_NAN;

/// Result type for ranging operations
pub type RangingResult<T> = Result<T, RangingError>;

/// Ranging errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangingError {
    /// No echo pulse completed within the bounded wait
    #[error("No echo within {timeout_us} us")]
    Timeout {
        /// The deadline that expired, in microseconds
        timeout_us: u32,
    },

    /// Echo converted to a distance outside the configured window
    #[error("Distance {distance} cm outside window [{min}, {max}]")]
    OutOfWindow {
        /// Converted one-way distance in centimeters
        distance: u16,
        /// Window floor in centimeters
        min: u16,
        /// Window ceiling in centimeters
        max: u16,
    },

    /// Raw round trip outside the time-domain equivalent of the window
    #[error("Round trip {round_trip_us} us outside [{min_us}, {max_us}]")]
    RoundTripOutOfWindow {
        /// Measured echo pulse width in microseconds
        round_trip_us: u32,
        /// Shortest accepted pulse width
        min_us: u32,
        /// Longest accepted pulse width
        max_us: u32,
    },

    /// Trigger or echo pin could not be driven or read
    #[error("Pin I/O failed: {kind:?}")]
    Pin {
        /// Category reported by the HAL
        kind: ErrorKind,
    },
}

impl RangingError {
    /// Build a `Pin` error from any HAL digital error
    pub fn pin<E: embedded_hal::digital::Error>(err: E) -> Self {
        Self::Pin { kind: err.kind() }
    }

    /// True for the two failures the sensor produces in normal operation
    pub fn is_soft(&self) -> bool {
        !matches!(self, Self::Pin { .. })
    }
}

/// Collapse a distance result to the numeric sentinel convention
pub fn sentinel_or_distance(result: RangingResult<u16>) -> u16 {
    result.unwrap_or(SONAR_NAN)
}

#[cfg(feature = "defmt")]
impl defmt::Format for RangingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Timeout { timeout_us } =>
                defmt::write!(fmt, "No echo within {} us", timeout_us),
            Self::OutOfWindow { distance, min, max } =>
                defmt::write!(fmt, "Distance {} cm outside [{}, {}]", distance, min, max),
            Self::RoundTripOutOfWindow { round_trip_us, min_us, max_us } =>
                defmt::write!(fmt, "Round trip {} us outside [{}, {}]", round_trip_us, min_us, max_us),
            Self::Pin { .. } =>
                defmt::write!(fmt, "Pin I/O failed"),
        }
    }
}
