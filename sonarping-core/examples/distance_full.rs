//! Full Distance Measurement Example
//!
//! Runs the complete firmware loop against a simulated HC-SR04:
//! - Measuring window limited to 5 - 250 cm
//! - Ambient temperature varying between 10 and 40°C, fed to the engine
//!   before every measurement
//! - Echo timed by busy-polling an input pin against a microsecond clock
//! - A report every sixth measurement
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example distance_full
//! ```

use std::{
    cell::Cell,
    convert::Infallible,
    rc::Rc,
    time::{Duration, Instant},
};

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use sonarping_core::{
    schedule::{MeasurementTimer, PublishDivider},
    sound::speed_of_sound_m_per_s,
    time::{StdDelay, StdMicros, SystemTime},
    PolledEcho, RangeWindow, RangingConfig, RangingEngine, TimeSource,
};

/// Measuring period in milliseconds
const PERIOD_MEASURE_MS: u64 = 500;

/// Report every n-th measurement
const COEF_PUBLISH: u8 = 6;

/// Measuring window (cm)
const DISTANCE_MIN: u16 = 5;
const DISTANCE_MAX: u16 = 250;

/// Simulated temperature range (°C)
const TEMPERATURE_MIN: i8 = 10;
const TEMPERATURE_MAX: i8 = 40;

/// Time between the end of the trigger pulse and the echo rising (µs)
const ECHO_LATENCY_US: u64 = 200;

/// State shared between the simulated trigger and echo pins
#[derive(Default)]
struct SensorState {
    /// When the trigger line last fell
    pinged_at: Cell<Option<Instant>>,
    /// Distance to the reflector, `None` for open space
    reflector_cm: Cell<Option<u32>>,
    /// Actual air temperature
    temperature: Cell<i8>,
}

struct SimulatedTrigger(Rc<SensorState>);

impl ErrorType for SimulatedTrigger {
    type Error = Infallible;
}

impl OutputPin for SimulatedTrigger {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.pinged_at.set(Some(Instant::now()));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

struct SimulatedEchoLine(Rc<SensorState>);

impl ErrorType for SimulatedEchoLine {
    type Error = Infallible;
}

impl InputPin for SimulatedEchoLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let (Some(pinged_at), Some(distance_cm)) = (self.0.pinged_at.get(), self.0.reflector_cm.get()) else {
            return Ok(false);
        };
        let speed = speed_of_sound_m_per_s(self.0.temperature.get());
        let width_us = (distance_cm as f32 * 20_000.0 / speed) as u64;

        let rise = pinged_at + Duration::from_micros(ECHO_LATENCY_US);
        let fall = rise + Duration::from_micros(width_us);
        let now = Instant::now();
        Ok(now >= rise && now < fall)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Deterministic stand-in for a random source
fn scramble(n: u32) -> u32 {
    n.wrapping_mul(1_103_515_245).wrapping_add(12_345) >> 16
}

fn main() {
    println!("DISTANCE-FULL (sonarping-core {})", sonarping_core::VERSION);

    let state = Rc::new(SensorState::default());
    let echo = PolledEcho::new(SimulatedEchoLine(state.clone()), StdMicros::new());

    let config = RangingConfig::default()
        .with_window(RangeWindow::new(DISTANCE_MIN, DISTANCE_MAX))
        .with_echo_timeout_us(30_000);
    let mut sonar = RangingEngine::with_config(SimulatedTrigger(state.clone()), echo, StdDelay, config);

    println!("---");
    println!("DistCur\tTemp\tDistMin\tDistMax");

    let clock = SystemTime;
    let mut timer = MeasurementTimer::for_config(PERIOD_MEASURE_MS, sonar.config());
    let mut publish = PublishDivider::new(COEF_PUBLISH);
    let mut cycle = 0u32;

    while cycle < 36 {
        if !timer.due(clock.now()) {
            std::thread::sleep(Duration::from_millis(1));
            continue;
        }
        cycle += 1;

        let span = (TEMPERATURE_MAX - TEMPERATURE_MIN + 1) as u32;
        let temperature = TEMPERATURE_MIN + (scramble(cycle) % span) as i8;
        state.temperature.set(temperature);
        state.reflector_cm.set(match scramble(cycle + 1000) % 10 {
            0 => None,
            1 => Some(300),
            n => Some(20 + n * 20),
        });

        // Temperature compensation from the (simulated) thermometer
        sonar.set_temperature(temperature);
        let distance = sonar.get_distance();

        if publish.tick() {
            println!(
                "{}\t{}\t{}\t{}",
                distance,
                sonar.temperature(),
                sonar.distance_min(),
                sonar.distance_max()
            );
        }
    }
}
