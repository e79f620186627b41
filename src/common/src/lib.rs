//! Plain data types shared by the OopsOS kernel and its hardware layer.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod error;
pub mod status;

pub use color::{Color, ColorCode, ScreenChar};
pub use error::{InvalidColor, LineError};
pub use status::ControllerStatus;
