//! Hardware Seams for the Ranging Engine
//!
//! The engine drives its trigger line through `embedded_hal::digital::OutputPin`
//! and waits through `embedded_hal::delay::DelayNs`. Two things are not
//! covered by `embedded-hal` and get their own traits here:
//!
//! - [`echo`] - measuring the width of the echo pulse with a deadline
//! - [`time`] - microsecond and millisecond clocks
//!
//! Platforms with input capture or a native `pulseIn` implement
//! [`EchoInput`] directly. Everything else can wrap a plain input pin and a
//! free-running timer in [`PolledEcho`](crate::echo::PolledEcho).

pub mod echo;
pub mod time;

pub use echo::EchoInput;
pub use time::{MicrosClock, TimeSource};
