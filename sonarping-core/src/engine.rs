//! Ranging Engine
//!
//! ## Overview
//!
//! [`RangingEngine`] owns one ultrasonic sensor: its trigger pin, its echo
//! input and a delay provider. Every call to [`RangingEngine::measure`] is a
//! complete, independent transaction:
//!
//! ```text
//! Idle -> Triggering -> Awaiting echo -> Timed out ----------------> Idle
//!                                     -> Echo received -> Converting
//!                                                            -> Rejected -> Idle
//!                                                            -> Accepted -> Idle
//! ```
//!
//! ## Pulse-Timing Protocol
//!
//! ```text
//!          29 ms        4 µs   10 µs
//! trig  ________________ ____/‾‾‾‾‾‾\___________________
//! echo  _________________________________/‾‾‾‾‾‾‾‾\_____
//!                                        |<-round->|
//!                                          trip
//! ```
//!
//! The 29 ms wait runs before *every* trigger, whatever the caller's cadence,
//! so back-to-back calls cannot violate the sensor's minimum cycle time.
//!
//! ## Blocking
//!
//! A measurement blocks for the inter-ping delay plus up to the echo
//! timeout. There is no background work; schedulers must allow for
//! [`RangingConfig::blocking_budget_ms`] per call.
//!
//! ```rust
//! # use core::convert::Infallible;
//! # use embedded_hal_mock::eh1::{delay::NoopDelay, digital::{Mock, State, Transaction}};
//! # use sonarping_core::traits::EchoInput;
//! # let trigger = Mock::new(&[
//! #     Transaction::set(State::Low),
//! #     Transaction::set(State::Low),
//! #     Transaction::set(State::High),
//! #     Transaction::set(State::Low),
//! # ]);
//! # struct Echo(u32);
//! # impl EchoInput for Echo {
//! #     type Error = Infallible;
//! #     fn pulse_width_us(&mut self, _: u32) -> Result<Option<u32>, Infallible> { Ok(Some(self.0)) }
//! # }
//! use sonarping_core::RangingEngine;
//!
//! let mut sonar = RangingEngine::new(trigger, Echo(1160), NoopDelay);
//! sonar.set_temperature(20);
//!
//! assert_eq!(sonar.get_distance(), 20);
//! # let (mut trigger, _, _) = sonar.release();
//! # trigger.done();
//! ```

use embedded_hal::{delay::DelayNs, digital::OutputPin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::{RangeWindow, RangingConfig, RejectionPolicy},
    constants::{
        INTER_PING_DELAY_MS, SONAR_NAN, TEMPERATURE_DEFAULT_C, TRIGGER_PULSE_US, TRIGGER_SETTLE_US,
    },
    errors::{RangingError, RangingResult},
    sound,
    traits::EchoInput,
};

/// One accepted reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement {
    /// Distance to the reflector, whole centimeters rounded up
    pub distance_cm: u16,

    /// Echo pulse width the distance was computed from
    pub round_trip_us: u32,

    /// Sound pace used for the conversion
    pub pace_us_per_cm: u8,

    /// Temperature the pace was computed for
    pub temperature: i8,
}

/// Driver for one trigger/echo ultrasonic sensor
pub struct RangingEngine<T, E, D> {
    trigger: T,
    echo: E,
    delay: D,
    config: RangingConfig,
}

impl<T, E, D> RangingEngine<T, E, D>
where
    T: OutputPin,
    E: EchoInput,
    D: DelayNs,
{
    /// Engine with the full hardware window and 20°C
    pub fn new(trigger: T, echo: E, delay: D) -> Self {
        Self::with_config(trigger, echo, delay, RangingConfig::default())
    }

    /// Engine accepting distances within `window`
    pub fn with_window(trigger: T, echo: E, delay: D, window: RangeWindow) -> Self {
        Self::with_config(trigger, echo, delay, RangingConfig::default().with_window(window))
    }

    /// Engine with an explicit configuration
    ///
    /// Drives the trigger line low so the first ping starts from a known
    /// level. A pin failure here is logged and otherwise ignored; the next
    /// measurement will report it.
    pub fn with_config(mut trigger: T, echo: E, delay: D, config: RangingConfig) -> Self {
        if let Err(err) = trigger.set_low() {
            let err = RangingError::pin(err);
            log_warn!("Trigger pin setup failed: {}", err);
        }

        log_debug!(
            "Ranging engine ready: window [{}, {}] cm, {} C, timeout {} us",
            config.window.min(),
            config.window.max(),
            config.temperature,
            config.echo_timeout_us
        );

        Self { trigger, echo, delay, config }
    }

    /// Store the ambient temperature for subsequent measurements
    pub fn set_temperature(&mut self, temperature: i8) {
        self.config.temperature = temperature;
    }

    /// Go back to the default 20°C
    pub fn reset_temperature(&mut self) {
        self.config.temperature = TEMPERATURE_DEFAULT_C;
    }

    /// Current ambient temperature (°C)
    pub fn temperature(&self) -> i8 {
        self.config.temperature
    }

    /// Shortest accepted distance (cm)
    pub fn distance_min(&self) -> u16 {
        self.config.window.min()
    }

    /// Longest accepted distance (cm)
    pub fn distance_max(&self) -> u16 {
        self.config.window.max()
    }

    /// Accepted distance window
    pub fn window(&self) -> RangeWindow {
        self.config.window
    }

    /// Active configuration
    pub fn config(&self) -> &RangingConfig {
        &self.config
    }

    /// Sound pace at the current temperature (µs per cm)
    pub fn pace(&self) -> u8 {
        sound::sound_pace(self.config.temperature)
    }

    /// Round trip implied by `distance_cm` at the current temperature
    pub fn time_for_distance(&self, distance_cm: u16) -> u32 {
        sound::time_for_distance(distance_cm, self.pace())
    }

    /// Measure the distance to the nearest reflector
    pub fn measure(&mut self) -> RangingResult<Measurement> {
        let round_trip_us = self.ping()?;

        let temperature = self.config.temperature;
        let pace = sound::sound_pace(temperature);
        let window = self.config.window;

        if self.config.rejection == RejectionPolicy::RoundTripTime {
            let min_us = sound::time_for_distance(window.min(), pace);
            let max_us = sound::time_for_distance(window.max(), pace);
            if !(min_us..=max_us).contains(&round_trip_us) {
                let err = RangingError::RoundTripOutOfWindow { round_trip_us, min_us, max_us };
                log_debug!("Rejected: {}", err);
                return Err(err);
            }
        }

        let distance = sound::distance_for_time(round_trip_us, pace);

        if self.config.rejection == RejectionPolicy::Distance && !window.contains(distance) {
            let err = RangingError::OutOfWindow {
                distance: u16::try_from(distance).unwrap_or(u16::MAX),
                min: window.min(),
                max: window.max(),
            };
            log_debug!("Rejected: {}", err);
            return Err(err);
        }

        log_trace!("Echo {} us at pace {} -> {} cm", round_trip_us, pace, distance);

        Ok(Measurement {
            // Either policy bounds the distance well below u16::MAX
            distance_cm: u16::try_from(distance).unwrap_or(u16::MAX),
            round_trip_us,
            pace_us_per_cm: pace,
            temperature,
        })
    }

    /// Measure and report the distance in centimeters, or 0 if no valid
    /// reading was obtained
    pub fn get_distance(&mut self) -> u16 {
        match self.measure() {
            Ok(measurement) => measurement.distance_cm,
            Err(err) => {
                if !err.is_soft() {
                    log_warn!("Measurement failed: {}", err);
                }
                SONAR_NAN
            }
        }
    }

    /// Give back the pins and the delay provider
    pub fn release(self) -> (T, E, D) {
        (self.trigger, self.echo, self.delay)
    }

    /// Fire one ping and return the echo round trip in microseconds
    fn ping(&mut self) -> RangingResult<u32> {
        self.delay.delay_ms(INTER_PING_DELAY_MS);

        self.trigger.set_low().map_err(RangingError::pin)?;
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.trigger.set_high().map_err(RangingError::pin)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().map_err(RangingError::pin)?;

        let timeout_us = self.config.echo_timeout_us;
        match self.echo.pulse_width_us(timeout_us).map_err(RangingError::pin)? {
            Some(round_trip_us) => Ok(round_trip_us),
            None => {
                log_debug!("No echo within {} us", timeout_us);
                Err(RangingError::Timeout { timeout_us })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State, Transaction},
    };

    /// Echo that always reports the same pulse width
    struct FixedEcho(Option<u32>);

    impl EchoInput for FixedEcho {
        type Error = Infallible;

        fn pulse_width_us(&mut self, _timeout_us: u32) -> Result<Option<u32>, Self::Error> {
            Ok(self.0)
        }
    }

    type Engine = RangingEngine<PinMock, FixedEcho, NoopDelay>;

    /// Engine whose trigger expects construction plus `pings` pulses
    fn engine(round_trip: Option<u32>, pings: usize) -> Engine {
        let mut expectations = vec![Transaction::set(State::Low)];
        for _ in 0..pings {
            expectations.push(Transaction::set(State::Low));
            expectations.push(Transaction::set(State::High));
            expectations.push(Transaction::set(State::Low));
        }
        RangingEngine::new(PinMock::new(&expectations), FixedEcho(round_trip), NoopDelay)
    }

    fn done(sonar: Engine) -> FixedEcho {
        let (mut trigger, echo, _delay) = sonar.release();
        trigger.done();
        echo
    }

    #[test]
    fn reference_reading() {
        let mut sonar = engine(Some(1160), 1);
        let measurement = sonar.measure().unwrap();

        assert_eq!(measurement.distance_cm, 20);
        assert_eq!(measurement.pace_us_per_cm, 58);
        assert_eq!(measurement.round_trip_us, 1160);
        assert_eq!(measurement.temperature, 20);
        done(sonar);
    }

    #[test]
    fn beyond_hardware_ceiling() {
        let mut sonar = engine(Some(600 * 58), 2);
        assert_eq!(
            sonar.measure(),
            Err(RangingError::OutOfWindow { distance: 600, min: 2, max: 500 })
        );
        assert_eq!(sonar.get_distance(), 0);
        done(sonar);
    }

    #[test]
    fn missing_echo() {
        let mut sonar = engine(None, 2);
        assert_eq!(sonar.measure(), Err(RangingError::Timeout { timeout_us: 3_000_000 }));
        assert_eq!(sonar.get_distance(), 0);
        done(sonar);
    }

    #[test]
    fn accessors_reflect_config() {
        let trigger = PinMock::new(&[Transaction::set(State::Low)]);
        let sonar = RangingEngine::with_window(trigger, FixedEcho(None), NoopDelay, RangeWindow::new(250, 5));
        assert_eq!(sonar.distance_min(), 5);
        assert_eq!(sonar.distance_max(), 250);
        assert_eq!(sonar.temperature(), 20);
        assert_eq!(sonar.pace(), 58);
        assert_eq!(sonar.time_for_distance(5), 580);
        done(sonar);
    }

    #[test]
    fn temperature_changes_pace() {
        let mut sonar = engine(Some(1160), 1);
        sonar.set_temperature(-15);
        assert_eq!(sonar.temperature(), -15);
        assert_eq!(sonar.pace(), 62);
        // 1160 / 62 = 18.7, rounded up
        assert_eq!(sonar.get_distance(), 19);
        done(sonar);
    }

    #[test]
    fn reset_temperature_goes_back_to_default() {
        let mut sonar = engine(None, 0);
        sonar.set_temperature(40);
        sonar.reset_temperature();
        assert_eq!(sonar.temperature(), TEMPERATURE_DEFAULT_C);
        assert_eq!(sonar.pace(), 58);
        done(sonar);
    }

    #[test]
    fn release_returns_parts() {
        let sonar = engine(Some(42), 0);
        let echo = done(sonar);
        assert_eq!(echo.0, Some(42));
    }
}
