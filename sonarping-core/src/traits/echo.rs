//! Echo Pulse Measurement
//!
//! After the trigger pulse the sensor raises its echo line for as long as
//! the sound took to come back. Measuring that width is the only timing
//! critical read in the whole protocol: one microsecond of error is
//! roughly 0.17 mm of distance, and missing the rising edge loses the
//! sample entirely.
//!
//! ## Implementation Requirements
//!
//! - The wait must be bounded by `timeout_us`. A sensor with nothing in
//!   front of it, or a disconnected echo wire, never produces a pulse.
//! - A pulse already in progress when the call starts is not the echo of
//!   this ping and must not be measured.
//! - Jitter beyond a few microseconds biases every reading.

/// Source of echo pulse widths
pub trait EchoInput {
    /// HAL error type
    type Error: embedded_hal::digital::Error;

    /// Width in microseconds of the next high pulse
    ///
    /// Returns `Ok(None)` if no complete pulse was seen within `timeout_us`
    /// of the call.
    fn pulse_width_us(&mut self, timeout_us: u32) -> Result<Option<u32>, Self::Error>;
}

impl<T: EchoInput + ?Sized> EchoInput for &mut T {
    type Error = T::Error;

    fn pulse_width_us(&mut self, timeout_us: u32) -> Result<Option<u32>, Self::Error> {
        T::pulse_width_us(self, timeout_us)
    }
}
