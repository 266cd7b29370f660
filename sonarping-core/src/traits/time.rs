//! Time Source Abstraction for Embedded Systems
//!
//! Two clocks with different jobs:
//!
//! - [`MicrosClock`]: a free-running microsecond counter for timing the echo
//!   pulse. Wraps around, only differences between readings matter.
//! - [`TimeSource`]: a millisecond clock for deciding *when* to measure.
//!   Consumed by the scheduling helpers, never by the engine itself.
//!
//! ## Example Implementation
//!
//! ```rust
//! use sonarping_core::traits::MicrosClock;
//!
//! struct Timer0 {
//!     // ... hardware timer register block
//! }
//!
//! impl MicrosClock for Timer0 {
//!     fn now_us(&mut self) -> u32 {
//!         // Read the 1 MHz counter register
//!         0 // placeholder
//!     }
//! }
//! ```
//!
//! ## Platform-Specific Considerations
//!
//! ### Bare Metal (no_std)
//! - Run a timer peripheral at 1 MHz, or scale a faster one
//! - A 32 bit counter wraps every 71 minutes, which wrapping arithmetic
//!   handles as long as a single pulse is shorter than that
//!
//! ### Linux/Unix
//! - `CLOCK_MONOTONIC` via `std::time::Instant` (see `time::StdMicros`)
//! - Scheduler preemption during the pulse shows up as an overlong echo

use crate::time::Timestamp;

/// Free-running microsecond counter
pub trait MicrosClock {
    /// Current counter value in microseconds, wrapping on overflow
    fn now_us(&mut self) -> u32;
}

impl<T: MicrosClock + ?Sized> MicrosClock for &mut T {
    fn now_us(&mut self) -> u32 {
        T::now_us(self)
    }
}

/// Source of time for scheduling measurements
///
/// The epoch depends on the implementation:
/// - Monotonic sources: milliseconds since boot
/// - Wall clock sources: milliseconds since Unix epoch
/// - Test sources: arbitrary starting point
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}
