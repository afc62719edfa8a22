//! Mapping from an angle to one of eight compass arrows

use crate::angle::AngleReading;

/// Width of one compass sector in degrees
pub const SECTOR_DEGREES: f32 = 45.0;

/// Compass direction, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    N = 0,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Direction nearest to `degrees`
    ///
    /// Each direction covers +/-22.5 degrees around its center. A value
    /// exactly on a sector edge goes to the clockwise neighbour. Any
    /// finite angle is accepted and folded into one revolution; non-finite
    /// input maps to [`Direction::N`].
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Direction::N;
        }

        let mut normalized = degrees % 360.0;
        if normalized < 0.0 {
            normalized += 360.0;
        }

        // floor(x + 0.5) on a non-negative value rounds half up
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (normalized / SECTOR_DEGREES + 0.5) as usize;
        Self::ALL[index % Self::ALL.len()]
    }

    /// Direction for an angle reading, `None` if the angle is unavailable
    #[must_use]
    pub fn from_reading(reading: AngleReading) -> Option<Self> {
        reading.degrees().map(Self::from_degrees)
    }

    /// Position of the direction, 0 (north) to 7 (north-west)
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Center of the sector in degrees
    #[must_use]
    pub fn center(self) -> f32 {
        f32::from(self.index()) * SECTOR_DEGREES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_map_to_themselves() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_degrees(direction.center()), direction);
        }
    }

    #[test]
    fn north_wraps_across_zero() {
        assert_eq!(Direction::from_degrees(0.0), Direction::N);
        assert_eq!(Direction::from_degrees(359.9), Direction::N);
        assert_eq!(Direction::from_degrees(337.5), Direction::N);
        assert_eq!(Direction::from_degrees(337.4), Direction::NW);
        assert_eq!(Direction::from_degrees(22.4), Direction::N);
    }

    #[test]
    fn ties_resolve_clockwise() {
        assert_eq!(Direction::from_degrees(22.5), Direction::NE);
        assert_eq!(Direction::from_degrees(67.5), Direction::E);
        assert_eq!(Direction::from_degrees(202.5), Direction::SW);
    }

    #[test]
    fn invariant_under_full_turns() {
        let mut degrees = 0.0_f32;
        while degrees < 360.0 {
            let direction = Direction::from_degrees(degrees);
            assert_eq!(Direction::from_degrees(degrees + 360.0), direction, "{degrees}");
            assert_eq!(Direction::from_degrees(degrees - 360.0), direction, "{degrees}");
            degrees += 0.25;
        }
    }

    #[test]
    fn every_raw_angle_has_a_direction() {
        let mut seen = [false; 8];
        for raw in 0..crate::angle::ANGLE_MAX {
            let direction = Direction::from_degrees(crate::angle::raw_to_degrees(raw));
            seen[usize::from(direction.index())] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn unavailable_reading_has_no_direction() {
        assert_eq!(Direction::from_reading(AngleReading::Unavailable), None);
        assert_eq!(
            Direction::from_reading(AngleReading::Degrees(180.0)),
            Some(Direction::S)
        );
    }

    #[test]
    fn non_finite_maps_to_north() {
        assert_eq!(Direction::from_degrees(f32::NAN), Direction::N);
        assert_eq!(Direction::from_degrees(f32::INFINITY), Direction::N);
    }
}
