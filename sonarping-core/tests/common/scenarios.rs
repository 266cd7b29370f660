//! Reference readings
//!
//! Round-trip times for named situations at 20°C, where the sound pace is
//! 58 µs per centimeter.

/// Pace at 20°C (µs/cm)
pub const PACE_20C: u32 = 58;

/// Obstacle 20 cm away
pub const ROUND_TRIP_20CM_US: u32 = 1160;

/// Reflector 600 cm away, past the 500 cm hardware ceiling
pub const ROUND_TRIP_600CM_US: u32 = 600 * PACE_20C;

/// Echo for the closest the sensor can see
pub const ROUND_TRIP_2CM_US: u32 = 2 * PACE_20C;

/// Round trip for `distance_cm` at 20°C
pub const fn round_trip_at_20c(distance_cm: u32) -> u32 {
    distance_cm * PACE_20C
}
