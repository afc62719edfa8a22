//! Asynchronous driver for AS5600 magnetic position sensor

use embedded_hal_async::i2c::I2c;

use crate::{
    angle::{self, AngleReading},
    error::Error,
    register::{AngleRegister, DEFAULT_ADDRESS, Register},
    state::State,
    status::{Status, StatusCache},
};

/// AS5600 driver instance (asynchronous)
///
/// Same contract as the blocking [`crate::As5600`]. Operations take
/// `&mut self`, so transactions never overlap.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct As5600<I2C> {
    i2c: I2C,
    address: u8,
    cache: StatusCache,
}

impl<I2C, E> As5600<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new AS5600 driver instance at the default address (0x36)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a new AS5600 driver instance at a custom address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            cache: StatusCache::Invalid,
        }
    }

    /// Configured 7-bit bus address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn read_register(&mut self, register: Register, buf: &mut [u8]) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Reading {} byte(s) from register 0x{:02X}",
            buf.len(),
            u8::from(register)
        );

        self.i2c
            .write(self.address, &[u8::from(register)])
            .await
            .map_err(Error::Communication)?;
        self.i2c
            .read(self.address, buf)
            .await
            .map_err(Error::Communication)?;

        Ok(())
    }

    /// Probe the bus for the sensor with an empty write
    pub async fn is_connected(&mut self) -> bool {
        self.i2c.write(self.address, &[]).await.is_ok()
    }

    /// Read the status register, bypassing the cache
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn read_status(&mut self) -> Result<Status, Error<E>> {
        self.cache.invalidate();

        let mut buf = [0u8; 1];
        self.read_register(Register::Status, &mut buf).await?;

        let status = Status::new(buf[0]);
        self.cache = StatusCache::Valid(status);
        Ok(status)
    }

    /// Status for the current polling period, [`Status::NONE`] on failure
    pub async fn status(&mut self) -> Status {
        if let Some(status) = self.cache.get() {
            return status;
        }

        match self.read_status().await {
            Ok(status) => status,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Status read failed, assuming no magnet");
                Status::NONE
            }
        }
    }

    /// MD: a magnet is detected
    pub async fn magnet_detected(&mut self) -> bool {
        self.status().await.magnet_detected()
    }

    /// ML: the magnet is too weak (too far away)
    pub async fn magnet_too_weak(&mut self) -> bool {
        self.status().await.magnet_too_weak()
    }

    /// MH: the magnet is too strong (too close)
    pub async fn magnet_too_strong(&mut self) -> bool {
        self.status().await.magnet_too_strong()
    }

    /// Invalidate the cached status
    pub fn clear_cache(&mut self) {
        self.cache.invalidate();
    }

    /// Get the 12-bit scaled angle (0-4095)
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn raw_angle(&mut self) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.read_register(Register::Angle, &mut buf).await?;
        Ok(AngleRegister::from(buf).angle())
    }

    /// Get the angular position in degrees, `[0, 360)`
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn angle_degrees(&mut self) -> Result<f32, Error<E>> {
        self.raw_angle().await.map(angle::raw_to_degrees)
    }

    /// Read the angle, [`AngleReading::Unavailable`] on bus failure
    pub async fn read_angle(&mut self) -> AngleReading {
        AngleReading::from(self.angle_degrees().await)
    }

    /// Run one polling iteration, see [`crate::As5600::poll`]
    pub async fn poll(&mut self) -> State {
        self.clear_cache();

        if !self.is_connected().await {
            State::Disconnected
        } else if self.magnet_too_strong().await {
            State::MagnetTooStrong
        } else if self.magnet_too_weak().await {
            State::MagnetTooWeak
        } else if self.magnet_detected().await {
            State::MagnetDetected(self.read_angle().await)
        } else {
            State::NoMagnet
        }
    }
}
