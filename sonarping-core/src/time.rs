//! Clock implementations
//!
//! Provides the clocks the crate ships with:
//! - `FixedTime` - manually advanced millisecond clock (tests, simulations)
//! - `SystemTime` - wall clock milliseconds (std only)
//! - `StdMicros` - monotonic microsecond counter (std only)
//! - `StdDelay` - `DelayNs` backed by `std::thread::sleep` (std only)

use crate::traits::TimeSource;

#[cfg(feature = "std")]
use crate::traits::MicrosClock;

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Monotonic microsecond counter backed by `std::time::Instant`
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct StdMicros {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdMicros {
    /// Counter starting at zero now
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for StdMicros {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MicrosClock for StdMicros {
    fn now_us(&mut self) -> u32 {
        // Truncation gives the wrapping behaviour of a hardware counter
        self.origin.elapsed().as_micros() as u32
    }
}

/// Delay provider backed by `std::thread::sleep`
///
/// Sleep granularity on a desktop OS is far coarser than the 10 µs trigger
/// pulse. Good enough for simulations, not for driving real hardware.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl embedded_hal::delay::DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut clock = FixedTime::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.advance(500);
        assert_eq!(clock.now(), 1500);

        clock.set(10);
        assert_eq!(clock.now(), 10);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_micros_is_monotonic() {
        let mut clock = StdMicros::new();
        let first = clock.now_us();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = clock.now_us();
        assert!(second.wrapping_sub(first) >= 2000);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_wall_clock() {
        // Any date after 2020-01-01
        assert!(SystemTime.now() > 1_577_836_800_000);
    }
}
