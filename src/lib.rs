#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod angle;
#[cfg(feature = "async")]
pub mod asynch;
mod direction;
mod display;
mod driver;
mod error;
mod monitor;
mod register;
mod state;
mod status;

pub use angle::{ANGLE_MAX, AngleReading, DEGREES_PER_RAW_UNIT, raw_to_degrees};
pub use direction::Direction;
pub use display::{Glyph, Indicator, LedMatrix};
pub use driver::As5600;
pub use error::Error;
pub use monitor::{DEFAULT_PERIOD_MS, Monitor};
pub use register::{AngleRegister, DEFAULT_ADDRESS, Register};
pub use state::State;
pub use status::{Status, StatusCache};
