//! Register addresses for AS5600 sensor.

/// Default 7-bit I2C address of the AS5600, fixed in silicon
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Register addresses for AS5600
///
/// Two-byte registers are addressed by their high byte; the device
/// auto-increments to the low byte on a multi-byte read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Number of times ZPOS and MPOS have been burned
    Zmco = 0x00,
    /// Zero position (12-bit)
    ZPos = 0x01,
    /// Maximum position (12-bit)
    MPos = 0x03,
    /// Maximum angle (12-bit)
    MAng = 0x05,
    /// Configuration
    Conf = 0x07,
    /// Unscaled and unmodified angle (12-bit)
    RawAngle = 0x0C,
    /// Magnet status (MD, ML, MH)
    Status = 0x0B,
    /// Scaled output angle (12-bit)
    Angle = 0x0E,
    /// Automatic gain control
    Agc = 0x1A,
    /// CORDIC magnitude (12-bit)
    Magnitude = 0x1B,
    /// Burn command
    Burn = 0xFF,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

bitfield::bitfield! {
    /// ANGLE
    ///
    /// The upper nibble of the high byte is unused and reads as zero on a
    /// healthy bus
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct AngleRegister(u16);
    impl Debug;
    u16;
    /// Scaled output angle, 0-4095 over one revolution
    pub angle, _: 11, 0;
}

impl From<[u8; 2]> for AngleRegister {
    fn from(bytes: [u8; 2]) -> Self {
        AngleRegister(u16::from_be_bytes(bytes))
    }
}
