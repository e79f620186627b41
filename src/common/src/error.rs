//! Error types shared across the workspace.

use core::fmt;

/// A nibble that does not name one of the 16 VGA palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidColor(pub u8);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid VGA color index {:#x}", self.0)
    }
}

/// Line capture errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineError {
    /// The line buffer is at capacity; the byte was not captured.
    Full,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Full => write!(f, "line buffer full"),
        }
    }
}
