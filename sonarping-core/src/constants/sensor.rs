//! Sensor Specifications and Limits
//!
//! Operational limits and pulse-timing requirements for HC-SR04 class
//! ultrasonic ranging modules. Changing these values breaks the trigger
//! protocol or admits readings the transducer cannot produce.

// ===== MEASUREMENT RESULT =====

/// Sentinel reported in place of a distance when no valid reading exists.
///
/// Covers both a missing echo and an echo outside the configured window.
/// A valid reading is never zero because the window floor is 2 cm.
pub const SONAR_NAN: u16 = 0;

// ===== RANGE LIMITS =====

/// Minimum measurable distance (cm).
///
/// Below this the echo overlaps the transmit burst ring-down.
///
/// Source: HC-SR04 datasheet (2 cm - 400 cm, clones up to 500 cm)
pub const DISTANCE_MIN_CM: u16 = 2;

/// Maximum measurable distance (cm).
///
/// Upper limit of the transducer. Configured windows are clamped to it.
///
/// Source: HC-SR04 datasheet and common clone modules
pub const DISTANCE_MAX_CM: u16 = 500;

// ===== THERMAL COMPENSATION =====

/// Ambient temperature assumed until a caller provides one (°C).
pub const TEMPERATURE_DEFAULT_C: i8 = 20;

// ===== PULSE-TIMING PROTOCOL =====

/// Minimum delay between two consecutive pings (ms).
///
/// Lets the previous burst decay so a late echo is not taken for a new one.
///
/// Source: HC-SR04 datasheet, "over 60 ms measurement cycle" relaxed to the
/// 29 ms that covers the 500 cm round trip
pub const INTER_PING_DELAY_MS: u32 = 29;

/// Low time on the trigger line before the trigger pulse (µs).
///
/// Source: bench testing, the line needs a clean low level first
pub const TRIGGER_SETTLE_US: u32 = 4;

/// Width of the trigger pulse (µs).
///
/// Source: HC-SR04 datasheet, "10 µs TTL pulse"
pub const TRIGGER_PULSE_US: u32 = 10;
