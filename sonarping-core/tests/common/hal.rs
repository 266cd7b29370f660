//! HAL doubles
//!
//! Trigger pins and delays are `embedded-hal-mock` mocks, which check every
//! expected transaction in order once `done()` is called. The echo side is
//! this crate's own trait and gets scripted stand-ins here.

use std::{collections::VecDeque, convert::Infallible, io};

use embedded_hal_mock::eh1::{
    delay::{CheckedDelay, Transaction as DelayTransaction},
    digital::{Mock as PinMock, State, Transaction as PinTransaction},
    MockError,
};
use sonarping_core::EchoInput;

/// Trigger writes for construction followed by `pings` measurements
pub fn trigger_expectations(pings: usize) -> Vec<PinTransaction> {
    let mut expectations = vec![PinTransaction::set(State::Low)];
    for _ in 0..pings {
        expectations.extend([
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);
    }
    expectations
}

/// Waits for `pings` measurements: inter-ping delay, settle, pulse
pub fn delay_expectations(pings: usize) -> Vec<DelayTransaction> {
    let mut expectations = Vec::new();
    for _ in 0..pings {
        expectations.extend([
            DelayTransaction::delay_ms(29),
            DelayTransaction::delay_us(4),
            DelayTransaction::delay_us(10),
        ]);
    }
    expectations
}

/// Delay for measurements that fail right after the inter-ping wait
pub fn aborted_delay(pings: usize) -> CheckedDelay {
    let expectations: Vec<_> = (0..pings).map(|_| DelayTransaction::delay_ms(29)).collect();
    CheckedDelay::new(&expectations)
}

/// Trigger pin expecting construction plus `pings` trigger pulses
pub fn trigger_pin(pings: usize) -> PinMock {
    PinMock::new(&trigger_expectations(pings))
}

/// Delay expecting the waits of `pings` measurements
pub fn checked_delay(pings: usize) -> CheckedDelay {
    CheckedDelay::new(&delay_expectations(pings))
}

/// Error reported by a pin with nothing on the other end
pub fn disconnected() -> MockError {
    MockError::Io(io::ErrorKind::NotConnected)
}

/// Trigger pin failing at construction and at the start of each of `pings`
/// measurements
pub fn broken_trigger(pings: usize) -> PinMock {
    let expectations: Vec<_> = (0..=pings)
        .map(|_| PinTransaction::set(State::Low).with_error(disconnected()))
        .collect();
    PinMock::new(&expectations)
}

/// Echo replaying one scripted result per measurement
///
/// Once the script is exhausted every further read times out. Each
/// requested timeout is kept for inspection.
pub struct ScriptedEcho {
    script: VecDeque<Option<u32>>,
    pub timeouts: Vec<u32>,
}

impl ScriptedEcho {
    pub fn new(script: &[Option<u32>]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            timeouts: Vec::new(),
        }
    }

    /// Scripted echoes not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EchoInput for ScriptedEcho {
    type Error = Infallible;

    fn pulse_width_us(&mut self, timeout_us: u32) -> Result<Option<u32>, Self::Error> {
        self.timeouts.push(timeout_us);
        Ok(self.script.pop_front().flatten())
    }
}

/// Echo input whose pin cannot be read
pub struct BrokenEcho;

impl EchoInput for BrokenEcho {
    type Error = MockError;

    fn pulse_width_us(&mut self, _timeout_us: u32) -> Result<Option<u32>, Self::Error> {
        Err(disconnected())
    }
}
