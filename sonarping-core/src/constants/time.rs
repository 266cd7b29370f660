//! Time-Related Constants
//!
//! Conversion factors and timeouts used by the pulse-timing protocol and
//! the scheduling helpers.

// ===== TIME UNIT CONVERSIONS =====

/// Microseconds per millisecond.
pub const US_PER_MS: u32 = 1000;

// ===== ECHO TIMEOUT =====

/// Default upper bound on the echo wait (µs).
///
/// Matches the 3 second default of the Wiring `pulseIn()` primitive the
/// sensor is usually driven with. A 500 cm round trip takes under 30 ms,
/// so anything past a few tens of milliseconds means no echo at all;
/// integrations that care about latency should lower it.
pub const DEFAULT_ECHO_TIMEOUT_US: u32 = 3_000_000;
