//! Speed-of-Sound Model and Time/Distance Conversion
//!
//! ## Sound Pace
//!
//! The engine never works with the speed of sound directly. It uses the
//! *pace*: whole microseconds of echo round trip per centimeter of distance
//! to the reflector. At 20°C sound travels 343.4 m/s, so one centimeter
//! out and back takes 58.2 µs and the pace is 58.
//!
//! ```text
//! T (°C)   c (m/s)   pace (µs/cm)
//!  -15      322.2        62
//!    0      331.3        60
//!   20      343.4        58
//!   40      355.5        56
//! ```
//!
//! The pace is truncated to an integer (58.24 becomes 58), which already
//! makes every distance come out slightly long. Distances are then rounded
//! *up* to the next centimeter, which pushes them further the same way. A
//! reading can therefore overstate the distance to an obstacle but never
//! understate it.
//!
//! ## Integer Arithmetic
//!
//! `2_000_000 / (33130 + 60.6 * T)` is evaluated as
//! `20_000_000 / (331_300 + 606 * T)`, which is exact for every `i8`
//! temperature and needs no FPU.

use crate::constants::physics::{
    PACE_BASE_DENOMINATOR, PACE_NUMERATOR, PACE_SLOPE_DENOMINATOR,
    SOUND_SPEED_0C_M_PER_S, SOUND_SPEED_SLOPE_M_PER_S_PER_C,
};

/// Speed of sound in air at `temperature` °C (m/s)
pub fn speed_of_sound_m_per_s(temperature: i8) -> f32 {
    SOUND_SPEED_0C_M_PER_S + SOUND_SPEED_SLOPE_M_PER_S_PER_C * f32::from(temperature)
}

/// Round-trip microseconds per centimeter of distance at `temperature` °C
///
/// Ranges from 78 at -128°C to 48 at 127°C, so it always fits a `u8`
/// and is never zero.
pub fn sound_pace(temperature: i8) -> u8 {
    // Smallest denominator is 331_300 - 606 * 128 = 253_732, always positive
    let denominator = PACE_BASE_DENOMINATOR + PACE_SLOPE_DENOMINATOR * i32::from(temperature);
    (PACE_NUMERATOR / denominator.unsigned_abs()) as u8
}

/// Round-trip time implied by a one-way distance: `distance * 2 * pace`
///
/// Used to derive the time-domain window of
/// [`RejectionPolicy::RoundTripTime`](crate::config::RejectionPolicy).
/// Note that `pace` already covers the round trip, so this is twice the
/// time [`distance_for_time`] maps back to `distance`.
pub fn time_for_distance(distance_cm: u16, pace: u8) -> u32 {
    u32::from(distance_cm) * 2 * u32::from(pace)
}

/// Whole centimeters for a round trip, rounded up
///
/// `(round_trip + pace - 1) / pace`. A zero pace yields zero rather than
/// dividing by it.
pub fn distance_for_time(round_trip_us: u32, pace: u8) -> u32 {
    if pace == 0 {
        return 0;
    }
    let pace = u32::from(pace);
    round_trip_us.div_ceil(pace)
}
