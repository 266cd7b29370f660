//! Basic Distance Measurement Example
//!
//! Measures the distance to a simulated reflector every 500 ms with the
//! default configuration (2 - 500 cm, 20°C) and prints it.
//!
//! ## What You'll Learn
//!
//! - Wiring a trigger pin, an echo input and a delay into the engine
//! - Reading distances with the `0 = no reading` convention
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example distance_basic
//! ```

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use sonarping_core::{
    schedule::MeasurementTimer,
    sound::speed_of_sound_m_per_s,
    time::{StdDelay, SystemTime},
    EchoInput, RangingConfig, RangingEngine, TimeSource, SONAR_NAN,
};

/// Measuring period in milliseconds
const PERIOD_MEASURE_MS: u64 = 500;

/// Reflector swinging between 10 and 300 cm, in 10 cm steps
struct SimulatedReflector {
    step: u32,
}

impl EchoInput for SimulatedReflector {
    type Error = Infallible;

    fn pulse_width_us(&mut self, _timeout_us: u32) -> Result<Option<u32>, Self::Error> {
        self.step = (self.step + 1) % 30;
        let distance_cm = 10 + self.step * 10;
        // Out and back at the speed of sound for 20°C
        let round_trip_us = distance_cm as f32 * 20_000.0 / speed_of_sound_m_per_s(20);
        Ok(Some(round_trip_us as u32))
    }
}

/// Trigger pin standing in for a GPIO
struct SimulatedTrigger;

impl ErrorType for SimulatedTrigger {
    type Error = Infallible;
}

impl OutputPin for SimulatedTrigger {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn main() {
    println!("DISTANCE-BASIC (sonarping-core {})", sonarping_core::VERSION);
    println!("---");

    let config = RangingConfig::default().with_echo_timeout_us(30_000);
    let mut sonar = RangingEngine::with_config(
        SimulatedTrigger,
        SimulatedReflector { step: 0 },
        StdDelay,
        config,
    );

    let clock = SystemTime;
    let mut timer = MeasurementTimer::for_config(PERIOD_MEASURE_MS, sonar.config());
    let mut measured = 0;

    while measured < 20 {
        if timer.due(clock.now()) {
            match sonar.get_distance() {
                SONAR_NAN => println!("no reading"),
                distance => println!("{} cm", distance),
            }
            measured += 1;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }
}
