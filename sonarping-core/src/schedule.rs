//! Measurement Scheduling Helpers
//!
//! The engine knows nothing about wall-clock time. Applications decide when
//! to measure, usually from a main loop polled as fast as it can spin:
//!
//! ```rust
//! use sonarping_core::{schedule::{MeasurementTimer, PublishDivider}, time::FixedTime};
//! use sonarping_core::traits::TimeSource;
//!
//! let mut clock = FixedTime::new(0);
//! let mut timer = MeasurementTimer::new(500);
//! let mut publish = PublishDivider::new(6);
//! let mut published = 0;
//!
//! for _ in 0..3000 {
//!     if timer.due(clock.now()) && publish.tick() {
//!         // sonar.get_distance() and report
//!         published += 1;
//!     }
//!     clock.advance(1);
//! }
//!
//! // Measured at 0, 500, ..., 2500 ms; published on the sixth
//! assert_eq!(published, 1);
//! ```

use crate::{config::RangingConfig, time::Timestamp};

/// Fires once per period of a millisecond clock
#[derive(Debug, Clone)]
pub struct MeasurementTimer {
    period_ms: u64,
    last: Option<Timestamp>,
}

impl MeasurementTimer {
    /// Timer firing every `period_ms`, starting with the first poll
    pub fn new(period_ms: u64) -> Self {
        Self { period_ms, last: None }
    }

    /// Timer firing every `period_ms`, stretched to cover the worst-case
    /// blocking time of a measurement with `config`
    pub fn for_config(period_ms: u64, config: &RangingConfig) -> Self {
        let budget = u64::from(config.blocking_budget_ms());
        if period_ms < budget {
            log_warn!("Measurement period {} ms below blocking budget, using {} ms", period_ms, budget);
        }
        Self::new(period_ms.max(budget))
    }

    /// Effective period in milliseconds
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// True if a measurement is due at `now`, arming the next period
    ///
    /// A clock that jumps backwards re-arms the timer from `now`.
    pub fn due(&mut self, now: Timestamp) -> bool {
        match self.last {
            Some(last) if now >= last && now - last < self.period_ms => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Passes every `every`-th event
#[derive(Debug, Clone)]
pub struct PublishDivider {
    every: u8,
    count: u8,
}

impl PublishDivider {
    /// Divider passing one event out of `every`; zero behaves like one
    pub fn new(every: u8) -> Self {
        Self { every: every.max(1), count: 0 }
    }

    /// Count one event, true when it is the `every`-th
    pub fn tick(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.every {
            self.count = 0;
            true
        } else {
            false
        }
    }
}
