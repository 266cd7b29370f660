//! Common test utilities for integration tests
//!
//! This module provides:
//! - Mocked trigger pins and delays that verify the pulse-timing protocol
//! - Scripted echo sequences for multi-measurement scenarios
//! - Named reference readings

#![allow(dead_code)]

pub mod hal;
pub mod scenarios;

use embedded_hal_mock::eh1::{delay::CheckedDelay, digital::Mock as PinMock};
use sonarping_core::{RangingConfig, RangingEngine};

use hal::{checked_delay, trigger_pin, ScriptedEcho};

/// Engine wired to mocks
pub type MockEngine = RangingEngine<PinMock, ScriptedEcho, CheckedDelay>;

/// Build an engine whose echo replays `script`
///
/// The trigger and delay mocks expect exactly one measurement per script
/// entry; [`finish`] fails the test otherwise.
pub fn mock_engine(config: RangingConfig, script: &[Option<u32>]) -> MockEngine {
    RangingEngine::with_config(
        trigger_pin(script.len()),
        ScriptedEcho::new(script),
        checked_delay(script.len()),
        config,
    )
}

/// Check every expected pin write and delay happened, and hand back the echo
pub fn finish<E>(sonar: RangingEngine<PinMock, E, CheckedDelay>) -> E
where
    E: sonarping_core::EchoInput,
{
    let (mut trigger, echo, mut delay) = sonar.release();
    trigger.done();
    delay.done();
    echo
}
