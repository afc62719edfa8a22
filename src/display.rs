//! 8x8 LED matrix indicators

use crate::direction::Direction;

/// An 8x8 monochrome bitmap
///
/// One byte per row, top row first. The most significant bit is the
/// leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph([u8; 8]);

impl Glyph {
    /// Create a glyph from its rows
    #[must_use]
    pub const fn new(rows: [u8; 8]) -> Self {
        Self(rows)
    }

    /// Rows, top first
    #[must_use]
    pub const fn rows(&self) -> [u8; 8] {
        self.0
    }

    /// Whether the LED at column `x`, row `y` is lit
    ///
    /// Coordinates outside the matrix are never lit.
    #[must_use]
    pub const fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= 8 || y >= 8 {
            return false;
        }
        self.0[y] & (0x80 >> x) != 0
    }

    /// The glyph turned a quarter turn clockwise
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        let mut rows = [0u8; 8];
        let mut y = 0;
        while y < 8 {
            let mut x = 0;
            while x < 8 {
                // new (x, y) takes old (y, 7 - x)
                if self.pixel(y, 7 - x) {
                    rows[y] |= 0x80 >> x;
                }
                x += 1;
            }
            y += 1;
        }
        Self(rows)
    }
}

const ARROW_N: Glyph = Glyph::new([
    0b0001_1000,
    0b0011_1100,
    0b0111_1110,
    0b1101_1011,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
]);

const ARROW_NE: Glyph = Glyph::new([
    0b0000_1111,
    0b0000_0011,
    0b0000_0101,
    0b0000_1001,
    0b0001_0000,
    0b0010_0000,
    0b0100_0000,
    0b1000_0000,
]);

const ARROWS: [Glyph; 8] = {
    let e = ARROW_N.rotate_cw();
    let s = e.rotate_cw();
    let se = ARROW_NE.rotate_cw();
    let sw = se.rotate_cw();
    [
        ARROW_N,
        ARROW_NE,
        e,
        se,
        s,
        sw,
        s.rotate_cw(),
        sw.rotate_cw(),
    ]
};

const SKULL: Glyph = Glyph::new([
    0b0011_1100,
    0b0111_1110,
    0b1101_1011,
    0b1111_1111,
    0b0111_1110,
    0b0011_1100,
    0b0101_1010,
    0b0000_0000,
]);

const ANGRY: Glyph = Glyph::new([
    0b0000_0000,
    0b0100_0010,
    0b0010_0100,
    0b0010_0100,
    0b0000_0000,
    0b0011_1100,
    0b0100_0010,
    0b0000_0000,
]);

const CROSS: Glyph = Glyph::new([
    0b1000_0001,
    0b0100_0010,
    0b0010_0100,
    0b0001_1000,
    0b0001_1000,
    0b0010_0100,
    0b0100_0010,
    0b1000_0001,
]);

const QUESTION: Glyph = Glyph::new([
    0b0011_1100,
    0b0110_0110,
    0b0000_0110,
    0b0000_1100,
    0b0001_1000,
    0b0001_1000,
    0b0000_0000,
    0b0001_1000,
]);

const SAD: Glyph = Glyph::new([
    0b0000_0000,
    0b0010_0100,
    0b0010_0100,
    0b0000_0000,
    0b0000_0000,
    0b0011_1100,
    0b0100_0010,
    0b0000_0000,
]);

/// What the matrix shows for one polling iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Arrow pointing at the magnet direction
    Arrow(Direction),
    /// Sensor does not acknowledge its address
    Disconnected,
    /// Magnet too close
    TooStrong,
    /// Magnet too far
    TooWeak,
    /// Magnet detected but the angle could not be read
    ReadError,
    /// Sensor responds but sees no magnet
    NoMagnet,
}

impl Indicator {
    /// Bitmap for this indicator
    #[must_use]
    pub const fn glyph(self) -> Glyph {
        match self {
            Self::Arrow(direction) => ARROWS[direction as usize],
            Self::Disconnected => SKULL,
            Self::TooStrong => ANGRY,
            Self::TooWeak => CROSS,
            Self::ReadError => QUESTION,
            Self::NoMagnet => SAD,
        }
    }
}

/// Rendering surface for indicator glyphs
pub trait LedMatrix {
    /// Error type of the underlying display hardware
    type Error;

    /// Replace the current frame with `glyph`
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be pushed to the hardware
    fn show(&mut self, glyph: &Glyph) -> Result<(), Self::Error>;
}

impl<T: LedMatrix + ?Sized> LedMatrix for &mut T {
    type Error = T::Error;

    fn show(&mut self, glyph: &Glyph) -> Result<(), Self::Error> {
        (**self).show(glyph)
    }
}
