//! Busy-Polling Echo Measurement
//!
//! [`PolledEcho`] turns any `embedded_hal` input pin plus a microsecond
//! counter into an [`EchoInput`]. It is the portable fallback for platforms
//! without input capture, and follows the contract of the Wiring
//! `pulseIn(pin, HIGH, timeout)` primitive:
//!
//! ```text
//!            call                   rise            fall
//!             |                      |               |
//! echo  ‾‾‾‾‾‾‾‾‾\________________/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾\_______
//!             |<- 1. wait low ->|<- 2. wait high ->|<- 3. wait low ->|
//!             |<-------------------- timeout_us --------------------->|
//! ```
//!
//! All three waits share one deadline measured from the call, so the total
//! blocking time never exceeds `timeout_us` plus one poll.

use embedded_hal::digital::InputPin;

use crate::traits::{EchoInput, MicrosClock};

/// Echo input measured by polling a pin against a microsecond clock
#[derive(Debug)]
pub struct PolledEcho<P, C> {
    pin: P,
    clock: C,
}

impl<P, C> PolledEcho<P, C>
where
    P: InputPin,
    C: MicrosClock,
{
    /// Wrap an input pin and a free-running microsecond clock
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Give back the pin and the clock
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    /// Spin until the pin reads `high`, returning the time it did
    fn wait_for_level(&mut self, high: bool, start: u32, timeout_us: u32) -> Result<Option<u32>, P::Error> {
        loop {
            if self.pin.is_high()? == high {
                return Ok(Some(self.clock.now_us()));
            }
            if self.clock.now_us().wrapping_sub(start) >= timeout_us {
                return Ok(None);
            }
        }
    }
}

impl<P, C> EchoInput for PolledEcho<P, C>
where
    P: InputPin,
    C: MicrosClock,
{
    type Error = P::Error;

    fn pulse_width_us(&mut self, timeout_us: u32) -> Result<Option<u32>, Self::Error> {
        let start = self.clock.now_us();

        if self.wait_for_level(false, start, timeout_us)?.is_none() {
            log_trace!("Echo line stuck high");
            return Ok(None);
        }

        let Some(rise) = self.wait_for_level(true, start, timeout_us)? else {
            return Ok(None);
        };

        let Some(fall) = self.wait_for_level(false, start, timeout_us)? else {
            log_trace!("Echo pulse still open at deadline");
            return Ok(None);
        };

        Ok(Some(fall.wrapping_sub(rise)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Clock that ticks one microsecond per read
    struct TickClock<'a> {
        now: &'a Cell<u32>,
    }

    impl MicrosClock for TickClock<'_> {
        fn now_us(&mut self) -> u32 {
            let t = self.now.get();
            self.now.set(t.wrapping_add(1));
            t
        }
    }

    /// Echo line high during each `[rise, fall)` interval of shared time
    struct ScriptedLine<'a> {
        now: &'a Cell<u32>,
        pulses: &'a [(u32, u32)],
    }

    impl ErrorType for ScriptedLine<'_> {
        type Error = Infallible;
    }

    impl InputPin for ScriptedLine<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            let t = self.now.get();
            Ok(self.pulses.iter().any(|&(rise, fall)| (rise..fall).contains(&t)))
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    fn measure(start: u32, pulses: &[(u32, u32)], timeout_us: u32) -> Option<u32> {
        let now = Cell::new(start);
        let mut echo = PolledEcho::new(
            ScriptedLine { now: &now, pulses },
            TickClock { now: &now },
        );
        echo.pulse_width_us(timeout_us).unwrap()
    }

    #[test]
    fn measures_pulse_width() {
        assert_eq!(measure(0, &[(100, 1260)], 30_000), Some(1160));
    }

    #[test]
    fn no_pulse_times_out() {
        assert_eq!(measure(0, &[], 5_000), None);
    }

    #[test]
    fn stuck_high_times_out() {
        assert_eq!(measure(0, &[(0, u32::MAX)], 5_000), None);
    }

    #[test]
    fn pulse_longer_than_deadline_times_out() {
        assert_eq!(measure(0, &[(100, 10_000)], 5_000), None);
    }

    #[test]
    fn skips_pulse_in_progress() {
        // Line still high from an earlier echo when the call starts
        assert_eq!(measure(0, &[(0, 50), (200, 500)], 30_000), Some(300));
    }

    #[test]
    fn survives_counter_wrap() {
        assert_eq!(measure(u32::MAX - 100, &[(50, 250)], 30_000), Some(200));
    }
}
