//! VGA text-mode colors and cells.

use crate::error::InvalidColor;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Black color.
    Black = 0,
    /// Blue color.
    Blue = 1,
    /// Green color.
    Green = 2,
    /// Cyan color.
    Cyan = 3,
    /// Red color.
    Red = 4,
    /// Magenta color.
    Magenta = 5,
    /// Brown color.
    Brown = 6,
    /// Light grey color.
    LightGrey = 7,
    /// Dark grey color.
    DarkGrey = 8,
    /// Light blue color.
    LightBlue = 9,
    /// Light green color.
    LightGreen = 10,
    /// Light cyan color.
    LightCyan = 11,
    /// Light red color.
    LightRed = 12,
    /// Light magenta color.
    LightMagenta = 13,
    /// Light brown color, rendered as yellow by most adapters.
    LightBrown = 14,
    /// White color.
    White = 15,
}

impl Color {
    const PALETTE: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Brown,
        Color::LightGrey,
        Color::DarkGrey,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightBrown,
        Color::White,
    ];

    const fn from_nibble(nibble: u8) -> Color {
        Self::PALETTE[(nibble & 0x0F) as usize]
    }
}

impl TryFrom<u8> for Color {
    type Error = InvalidColor;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::PALETTE
            .get(value as usize)
            .copied()
            .ok_or(InvalidColor(value))
    }
}

/// Packed attribute byte: foreground in bits 0-3, background in bits 4-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// White on black, the attribute the display starts with.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::White, Color::Black);

    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Wraps a raw attribute byte. Every byte is a valid attribute.
    pub const fn from_raw(raw: u8) -> ColorCode {
        ColorCode(raw)
    }

    /// The raw attribute byte.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Color of the character glyph.
    pub const fn foreground(self) -> Color {
        Color::from_nibble(self.0)
    }

    /// Color of the cell behind the glyph.
    pub const fn background(self) -> Color {
        Color::from_nibble(self.0 >> 4)
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        ColorCode::DEFAULT
    }
}

/// A single character cell in the VGA buffer.
///
/// Layout matches the hardware: character in the low byte, attribute in the
/// high byte of a little-endian `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct ScreenChar {
    /// Code page 437 character byte.
    pub ascii_character: u8,
    /// Attribute byte.
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// Creates a cell from a character and an attribute.
    pub const fn new(ascii_character: u8, color_code: ColorCode) -> Self {
        ScreenChar {
            ascii_character,
            color_code,
        }
    }

    /// A space in the given attribute.
    pub const fn blank(color_code: ColorCode) -> Self {
        ScreenChar::new(b' ', color_code)
    }

    /// The 16-bit value the adapter sees for this cell.
    pub const fn to_u16(self) -> u16 {
        (self.color_code.0 as u16) << 8 | self.ascii_character as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_packs_nibbles() {
        let code = ColorCode::new(Color::LightGreen, Color::Blue);
        assert_eq!(code.raw(), 0x1A);
        assert_eq!(code.foreground(), Color::LightGreen);
        assert_eq!(code.background(), Color::Blue);
    }

    #[test]
    fn test_color_try_from() {
        assert_eq!(Color::try_from(0), Ok(Color::Black));
        assert_eq!(Color::try_from(15), Ok(Color::White));
        assert_eq!(Color::try_from(16), Err(InvalidColor(16)));
    }

    #[test]
    fn test_screen_char_word_layout() {
        let cell = ScreenChar::new(b'A', ColorCode::DEFAULT);
        assert_eq!(cell.to_u16(), 0x0F41);
        assert_eq!(ScreenChar::blank(ColorCode::DEFAULT).ascii_character, b' ');
    }
}
