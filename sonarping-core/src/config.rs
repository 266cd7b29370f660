//! Ranging Configuration
//!
//! Everything the engine needs besides its pins: the window of plausible
//! distances, the starting temperature, the echo deadline and where in the
//! pipeline implausible readings are rejected.
//!
//! Configuration never fails. Out-of-range bounds are clamped to what the
//! hardware supports and inverted bounds are swapped, because an unattended
//! sensor is better off measuring a slightly different window than not
//! measuring at all.
//!
//! ```rust
//! use sonarping_core::config::{RangeWindow, RangingConfig, RejectionPolicy};
//!
//! let config = RangingConfig::default()
//!     .with_window(RangeWindow::new(5, 250))
//!     .with_temperature(25)
//!     .with_echo_timeout_us(30_000)
//!     .with_rejection(RejectionPolicy::Distance);
//!
//! assert_eq!(config.window.max(), 250);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ECHO_TIMEOUT_US, DISTANCE_MAX_CM, DISTANCE_MIN_CM, INTER_PING_DELAY_MS,
    TEMPERATURE_DEFAULT_C, US_PER_MS,
};

/// Accepted distances in whole centimeters, `[min, max]` inclusive
///
/// Always satisfies `2 <= min <= max <= 500`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(u16, u16)", into = "(u16, u16)"))]
pub struct RangeWindow {
    min: u16,
    max: u16,
}

impl Default for RangeWindow {
    fn default() -> Self {
        Self {
            min: DISTANCE_MIN_CM,
            max: DISTANCE_MAX_CM,
        }
    }
}

impl RangeWindow {
    /// Create a window, clamping both bounds into the hardware range
    /// and swapping them if inverted
    pub fn new(min: u16, max: u16) -> Self {
        let min_clamped = min.clamp(DISTANCE_MIN_CM, DISTANCE_MAX_CM);
        let max_clamped = max.clamp(DISTANCE_MIN_CM, DISTANCE_MAX_CM);

        if min_clamped != min || max_clamped != max {
            log_warn!(
                "Range window [{}, {}] clamped to hardware limits [{}, {}]",
                min, max, DISTANCE_MIN_CM, DISTANCE_MAX_CM
            );
        }

        let (min, max) = if min_clamped > max_clamped {
            log_warn!("Range window inverted, swapping {} and {}", min_clamped, max_clamped);
            (max_clamped, min_clamped)
        } else {
            (min_clamped, max_clamped)
        };

        Self { min, max }
    }

    /// Window with the default floor and a custom ceiling
    pub fn up_to(max: u16) -> Self {
        Self::new(DISTANCE_MIN_CM, max)
    }

    /// Shortest accepted distance (cm)
    pub fn min(&self) -> u16 {
        self.min
    }

    /// Longest accepted distance (cm)
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Check whether a distance lies inside the window
    pub fn contains(&self, distance_cm: u32) -> bool {
        (u32::from(self.min)..=u32::from(self.max)).contains(&distance_cm)
    }
}

impl From<(u16, u16)> for RangeWindow {
    fn from((min, max): (u16, u16)) -> Self {
        Self::new(min, max)
    }
}

impl From<RangeWindow> for (u16, u16) {
    fn from(window: RangeWindow) -> Self {
        (window.min, window.max)
    }
}

/// Where out-of-window readings are rejected
///
/// The two policies are not equivalent. `Distance` compares the rounded
/// centimeter value against the window. `RoundTripTime` compares the raw
/// echo width against `time_for_distance(min)..=time_for_distance(max)`,
/// and since that helper counts the round trip twice, its window is twice
/// as wide as the distance window it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectionPolicy {
    /// Convert first, then check centimeters against the window
    #[default]
    Distance,
    /// Check the raw round trip before converting (legacy firmware behaviour)
    RoundTripTime,
}

/// Full engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangingConfig {
    /// Accepted distance window
    pub window: RangeWindow,

    /// Initial ambient temperature in °C
    pub temperature: i8,

    /// Upper bound on the echo wait in microseconds
    pub echo_timeout_us: u32,

    /// Rejection point for implausible readings
    pub rejection: RejectionPolicy,
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            window: RangeWindow::default(),
            temperature: TEMPERATURE_DEFAULT_C,
            echo_timeout_us: DEFAULT_ECHO_TIMEOUT_US,
            rejection: RejectionPolicy::default(),
        }
    }
}

impl RangingConfig {
    /// Set the accepted window
    pub fn with_window(mut self, window: RangeWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the initial temperature
    pub fn with_temperature(mut self, temperature: i8) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the echo deadline; zero is raised to one microsecond
    pub fn with_echo_timeout_us(mut self, timeout_us: u32) -> Self {
        self.echo_timeout_us = timeout_us.max(1);
        self
    }

    /// Set the rejection policy
    pub fn with_rejection(mut self, rejection: RejectionPolicy) -> Self {
        self.rejection = rejection;
        self
    }

    /// Worst-case time one measurement blocks its caller, in milliseconds
    ///
    /// Inter-ping delay plus the echo deadline, rounded up. A periodic
    /// scheduler should not fire faster than this.
    pub fn blocking_budget_ms(&self) -> u32 {
        INTER_PING_DELAY_MS + self.echo_timeout_us.div_ceil(US_PER_MS)
    }
}
