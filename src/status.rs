//! Magnet status register for AS5600

const MAGNET_DETECTED: u8 = 1 << 5;
const MAGNET_TOO_WEAK: u8 = 1 << 4;
const MAGNET_TOO_STRONG: u8 = 1 << 3;

/// Status flags from the `STATUS` register (0x0B)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    raw: u8,
}

impl Status {
    /// Status with no flag asserted, used when the register cannot be read
    pub const NONE: Self = Self::new(0);

    /// Create status from raw register value
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self { raw }
    }

    /// Get the raw register value
    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.raw
    }

    /// MD: Magnet was detected
    #[must_use]
    pub const fn magnet_detected(&self) -> bool {
        self.raw & MAGNET_DETECTED != 0
    }

    /// ML: AGC maximum gain overflow, magnet too weak (too far away)
    #[must_use]
    pub const fn magnet_too_weak(&self) -> bool {
        self.raw & MAGNET_TOO_WEAK != 0
    }

    /// MH: AGC minimum gain overflow, magnet too strong (too close)
    #[must_use]
    pub const fn magnet_too_strong(&self) -> bool {
        self.raw & MAGNET_TOO_STRONG != 0
    }

    /// Check if a magnet is present and its field is within range
    #[must_use]
    pub const fn magnetic_field_ok(&self) -> bool {
        self.magnet_detected() && !self.magnet_too_weak() && !self.magnet_too_strong()
    }
}

impl From<u8> for Status {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}

/// One-shot cache for the status register
///
/// Holds at most one status read per polling period. The owner calls
/// [`StatusCache::invalidate`] at the start of each period.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCache {
    /// No status read since the last invalidation
    #[default]
    Invalid,
    /// Status read during the current period
    Valid(Status),
}

impl StatusCache {
    /// Cached status, if any
    #[must_use]
    pub const fn get(&self) -> Option<Status> {
        match self {
            Self::Invalid => None,
            Self::Valid(status) => Some(*status),
        }
    }

    /// Mark the cache stale so the next access fetches again
    pub fn invalidate(&mut self) {
        *self = Self::Invalid;
    }

    /// Return the cached status or run `fetch` to fill the cache
    ///
    /// A failed fetch leaves the cache invalid.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `fetch`
    pub fn get_or_fetch<E>(
        &mut self,
        fetch: impl FnOnce() -> Result<Status, E>,
    ) -> Result<Status, E> {
        if let Self::Valid(status) = self {
            return Ok(*status);
        }

        match fetch() {
            Ok(status) => {
                *self = Self::Valid(status);
                Ok(status)
            }
            Err(e) => {
                *self = Self::Invalid;
                Err(e)
            }
        }
    }
}
