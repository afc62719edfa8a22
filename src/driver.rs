//! Blocking driver for AS5600 magnetic position sensor

use embedded_hal::i2c::I2c;

use crate::{
    angle::{self, AngleReading},
    error::Error,
    register::{AngleRegister, DEFAULT_ADDRESS, Register},
    state::State,
    status::{Status, StatusCache},
};

/// Select `register`, then read `buf.len()` bytes starting at it
///
/// The register pointer write and the data read are two separate bus
/// transactions.
fn read_register<I2C: I2c>(
    i2c: &mut I2C,
    address: u8,
    register: Register,
    buf: &mut [u8],
) -> Result<(), Error<I2C::Error>> {
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "Reading {} byte(s) from register 0x{:02X}",
        buf.len(),
        u8::from(register)
    );

    i2c.write(address, &[u8::from(register)])
        .map_err(Error::Communication)?;
    i2c.read(address, buf).map_err(Error::Communication)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("Register 0x{:02X} value: {:02X}", u8::from(register), &*buf);

    Ok(())
}

fn fetch_status<I2C: I2c>(i2c: &mut I2C, address: u8) -> Result<Status, Error<I2C::Error>> {
    let mut buf = [0u8; 1];
    read_register(i2c, address, Register::Status, &mut buf)?;
    Ok(Status::new(buf[0]))
}

/// AS5600 driver instance (blocking)
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
    ///
    /// Only useful behind an address translator; the sensor itself always
    /// answers on [`DEFAULT_ADDRESS`].
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

    /// Probe the bus for the sensor
    ///
    /// Sends an empty write to the configured address, as a bus scan does,
    /// and reports whether it was acknowledged.
    pub fn is_connected(&mut self) -> bool {
        let connected = self.i2c.write(self.address, &[]).is_ok();

        #[cfg(feature = "defmt")]
        if !connected {
            defmt::debug!("No ACK from address 0x{:02X}", self.address);
        }

        connected
    }

    /// Read the status register, bypassing the cache
    ///
    /// A successful read refreshes the cache. A failed read leaves the
    /// cache invalid so the next flag access tries again.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn read_status(&mut self) -> Result<Status, Error<E>> {
        self.cache.invalidate();
        self.cached_status()
    }

    fn cached_status(&mut self) -> Result<Status, Error<E>> {
        let Self {
            i2c,
            address,
            cache,
        } = self;
        cache.get_or_fetch(|| fetch_status(i2c, *address))
    }

    /// Status for the current polling period
    ///
    /// Reads the register on first access after [`Self::clear_cache`] and
    /// serves later calls from the cache. If the register cannot be read,
    /// no flag is reported.
    pub fn status(&mut self) -> Status {
        match self.cached_status() {
            Ok(status) => status,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Status read failed, assuming no magnet");
                Status::NONE
            }
        }
    }

    /// MD: a magnet is detected
    pub fn magnet_detected(&mut self) -> bool {
        self.status().magnet_detected()
    }

    /// ML: the magnet is too weak (too far away)
    pub fn magnet_too_weak(&mut self) -> bool {
        self.status().magnet_too_weak()
    }

    /// MH: the magnet is too strong (too close)
    pub fn magnet_too_strong(&mut self) -> bool {
        self.status().magnet_too_strong()
    }

    /// Invalidate the cached status
    ///
    /// Call once per polling period, before the first flag access.
    /// Otherwise every flag keeps answering from the first read.
    pub fn clear_cache(&mut self) {
        self.cache.invalidate();
    }

    /// Get the 12-bit scaled angle
    ///
    /// Value ranges from 0 to 4095 (0° to 359.912°)
    /// Use [`crate::ANGLE_MAX`] constant for conversion calculations
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn raw_angle(&mut self) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        read_register(&mut self.i2c, self.address, Register::Angle, &mut buf)?;
        Ok(AngleRegister::from(buf).angle())
    }

    /// Get the angular position in degrees, `[0, 360)`
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub fn angle_degrees(&mut self) -> Result<f32, Error<E>> {
        self.raw_angle().map(angle::raw_to_degrees)
    }

    /// Read the angle, never cached
    ///
    /// A bus failure yields [`AngleReading::Unavailable`].
    pub fn read_angle(&mut self) -> AngleReading {
        let reading = AngleReading::from(self.angle_degrees());

        #[cfg(feature = "defmt")]
        if reading == AngleReading::Unavailable {
            defmt::warn!("Angle read failed");
        }

        reading
    }

    /// Run one polling iteration
    ///
    /// Clears the status cache, probes the bus, then checks MH, ML and MD
    /// in that order. The angle is read only when a magnet is detected.
    pub fn poll(&mut self) -> State {
        self.clear_cache();

        if !self.is_connected() {
            State::Disconnected
        } else if self.magnet_too_strong() {
            State::MagnetTooStrong
        } else if self.magnet_too_weak() {
            State::MagnetTooWeak
        } else if self.magnet_detected() {
            State::MagnetDetected(self.read_angle())
        } else {
            State::NoMagnet
        }
    }
}
