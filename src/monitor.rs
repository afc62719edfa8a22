//! Fixed-period polling loop driving the LED matrix

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::{
    display::{Indicator, LedMatrix},
    driver::As5600,
    state::State,
};

/// Default time between two polling iterations
pub const DEFAULT_PERIOD_MS: u32 = 200;

/// Polls an [`As5600`] and shows the result on an 8x8 matrix
pub struct Monitor<I2C, M, D> {
    sensor: As5600<I2C>,
    matrix: M,
    delay: D,
    period_ms: u32,
}

impl<I2C, M, D> Monitor<I2C, M, D>
where
    I2C: I2c,
    M: LedMatrix,
    D: DelayNs,
{
    /// Create a monitor with the default 200 ms period
    pub fn new(sensor: As5600<I2C>, matrix: M, delay: D) -> Self {
        Self {
            sensor,
            matrix,
            delay,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }

    /// Set the time slept between iterations
    #[must_use]
    pub fn with_period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = period_ms;
        self
    }

    /// Time slept between iterations
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Access the sensor driver
    pub fn sensor(&mut self) -> &mut As5600<I2C> {
        &mut self.sensor
    }

    /// Release the sensor, matrix and delay, consuming the monitor
    pub fn release(self) -> (As5600<I2C>, M, D) {
        (self.sensor, self.matrix, self.delay)
    }

    /// Run one iteration: poll the sensor, log, and render
    ///
    /// Display errors are logged and otherwise ignored.
    pub fn step(&mut self) -> State {
        let state = self.sensor.poll();
        log_state(&state);

        let indicator = Indicator::from(state);
        if let Err(_e) = self.matrix.show(&indicator.glyph()) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Failed to show {}", indicator);
        }

        state
    }

    /// Poll forever at the configured period
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
            self.delay.delay_ms(self.period_ms);
        }
    }
}

#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn log_state(state: &State) {
    #[cfg(feature = "defmt")]
    match state {
        State::Disconnected => defmt::info!("Sensor not detected"),
        State::MagnetTooStrong => defmt::info!("Magnet too strong"),
        State::MagnetTooWeak => defmt::info!("Magnet too weak"),
        State::MagnetDetected(crate::AngleReading::Degrees(degrees)) => {
            defmt::info!("Angle: {=f32}", *degrees);
        }
        State::MagnetDetected(crate::AngleReading::Unavailable) => {
            defmt::info!("Magnet detected, angle unavailable");
        }
        State::NoMagnet => defmt::info!("No magnet detected"),
    };
}
