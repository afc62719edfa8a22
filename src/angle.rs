//! Raw angle conversion

/// Number of raw angle steps per revolution (12-bit: 0-4095)
pub const ANGLE_MAX: u16 = 0x0FFF + 1;

/// Degrees represented by one raw angle step, exactly 360 / 4096
pub const DEGREES_PER_RAW_UNIT: f32 = 360.0 / 4096.0;

/// Convert a 12-bit raw angle to degrees in `[0, 360)`
///
/// Bits above the 12-bit range are ignored. No rounding is applied.
#[must_use]
pub fn raw_to_degrees(raw: u16) -> f32 {
    f32::from(raw & (ANGLE_MAX - 1)) * DEGREES_PER_RAW_UNIT
}

/// Outcome of a single angle read
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngleReading {
    /// Angle in degrees, `[0, 360)`
    Degrees(f32),
    /// The bus transaction failed
    Unavailable,
}

impl AngleReading {
    /// Angle in degrees, or `None` if the read failed
    #[must_use]
    pub const fn degrees(self) -> Option<f32> {
        match self {
            Self::Degrees(degrees) => Some(degrees),
            Self::Unavailable => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for AngleReading
where
    T: Into<f32>,
{
    fn from(result: Result<T, E>) -> Self {
        result.map_or(Self::Unavailable, |degrees| Self::Degrees(degrees.into()))
    }
}
