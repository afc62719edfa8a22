//! Per-iteration sensor state

use crate::{angle::AngleReading, direction::Direction, display::Indicator};

/// Outcome of one polling iteration
///
/// Conditions are checked in declaration order and the first match wins,
/// so a disconnected sensor is never asked for its magnet status and a
/// magnet flagged too strong is reported as such even if it is also
/// detected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// The sensor did not acknowledge its address
    Disconnected,
    /// MH set
    MagnetTooStrong,
    /// ML set
    MagnetTooWeak,
    /// MD set; carries the angle read in the same iteration
    MagnetDetected(AngleReading),
    /// No status flag set (or the status register could not be read)
    NoMagnet,
}

impl State {
    /// Direction to display, if the state carries a valid angle
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::MagnetDetected(reading) => Direction::from_reading(*reading),
            _ => None,
        }
    }
}

impl From<State> for Indicator {
    fn from(state: State) -> Self {
        match state {
            State::Disconnected => Indicator::Disconnected,
            State::MagnetTooStrong => Indicator::TooStrong,
            State::MagnetTooWeak => Indicator::TooWeak,
            State::MagnetDetected(AngleReading::Degrees(degrees)) => {
                Indicator::Arrow(Direction::from_degrees(degrees))
            }
            State::MagnetDetected(AngleReading::Unavailable) => Indicator::ReadError,
            State::NoMagnet => Indicator::NoMagnet,
        }
    }
}
