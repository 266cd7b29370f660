//! Constants for SonarPing Core
//!
//! This module provides centralized, documented constants used throughout
//! the ranging engine. Values come from the HC-SR04 datasheet, from the
//! linear speed-of-sound model, or from bench testing, and each constant
//! names its source.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensor**: Datasheet limits and pulse-timing requirements
//! - **Physics**: Speed-of-sound model coefficients
//! - **Time**: Unit conversions and default timeouts
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include the unit in the name (`_CM`, `_US`, `_MS`, `_C`)
//! 3. Reference the datasheet or measurement that justifies a value

/// Sensor specifications and pulse-timing protocol values.
pub mod sensor;

/// Speed-of-sound model coefficients.
pub mod physics;

/// Time conversions and timeouts.
pub mod time;

// Re-export commonly used constants for convenience
pub use sensor::{
    SONAR_NAN, DISTANCE_MIN_CM, DISTANCE_MAX_CM, TEMPERATURE_DEFAULT_C,
    INTER_PING_DELAY_MS, TRIGGER_SETTLE_US, TRIGGER_PULSE_US,
};

pub use physics::{
    SOUND_SPEED_0C_M_PER_S, SOUND_SPEED_SLOPE_M_PER_S_PER_C,
    PACE_NUMERATOR, PACE_BASE_DENOMINATOR, PACE_SLOPE_DENOMINATOR,
};

pub use time::{
    US_PER_MS, DEFAULT_ECHO_TIMEOUT_US,
};
