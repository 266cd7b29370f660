//! Physical Constants for the Speed-of-Sound Model
//!
//! The ranging engine corrects the speed of sound for air temperature with
//! the linear approximation
//!
//! ```text
//! c (m/s) = 331.3 + 0.606 * T (°C)
//! ```
//!
//! and works in its reciprocal, the *sound pace*: microseconds of round trip
//! per centimeter of distance. Inverting and converting units gives
//!
//! ```text
//! pace (µs/cm) = 2_000_000 / (33130 + 60.6 * T)
//! ```
//!
//! The integer coefficients below are that expression scaled by ten so the
//! pace can be computed without floating point.

/// Speed of sound in dry air at 0°C (m/s).
///
/// Source: ISO 9613-1:1993
pub const SOUND_SPEED_0C_M_PER_S: f32 = 331.3;

/// Increase of the speed of sound per degree Celsius (m/s/°C).
///
/// Source: linearization of c = 331.3 * sqrt(1 + T / 273.15) around 0°C
pub const SOUND_SPEED_SLOPE_M_PER_S_PER_C: f32 = 0.606;

/// Numerator of the pace formula, scaled by ten.
///
/// `2_000_000 * 10`, where 2_000_000 folds the round trip factor and the
/// m/s to µs/cm conversion of the coefficients below.
pub const PACE_NUMERATOR: u32 = 20_000_000;

/// Temperature-independent part of the pace denominator, scaled by ten.
///
/// `331.3 m/s * 100 * 10`.
pub const PACE_BASE_DENOMINATOR: i32 = 331_300;

/// Temperature coefficient of the pace denominator, scaled by ten.
///
/// `0.606 m/s/°C * 100 * 10`.
pub const PACE_SLOPE_DENOMINATOR: i32 = 606;
