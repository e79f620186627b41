//! Text display surface.
//!
//! [`Display`] owns a character grid and the hardware cursor and tracks the
//! linear write position. It is the only thing that renders: code that wants
//! to print borrows it mutably.
//!
//! # Wrapping
//!
//! Reaching the bottom row does not scroll. The write position wraps to row 0
//! and later output overwrites whatever is there.

pub mod cursor;

pub use cursor::CrtcCursor;

use core::fmt;
use oops_common::{Color, ColorCode, ScreenChar};
use oops_hal::{CursorDevice, TextBuffer, TEXT_HEIGHT, TEXT_WIDTH};

/// Grid width in cells.
pub const WIDTH: usize = TEXT_WIDTH;

/// Grid height in cells.
pub const HEIGHT: usize = TEXT_HEIGHT;

/// Text display with cursor and color state.
pub struct Display<B, C> {
    buffer: B,
    cursor: C,
    /// Current row (0 to HEIGHT-1).
    row: usize,
    /// Current column (0 to WIDTH-1).
    column: usize,
    /// Attribute for newly written characters.
    color_code: ColorCode,
}

impl<B: TextBuffer, C: CursorDevice> Display<B, C> {
    /// Wraps a buffer and a cursor device.
    ///
    /// Nothing is written until [`Display::initialize`].
    pub fn new(buffer: B, cursor: C) -> Self {
        Display {
            buffer,
            cursor,
            row: 0,
            column: 0,
            color_code: ColorCode::DEFAULT,
        }
    }

    /// Resets the write position and color and blanks the whole screen.
    pub fn initialize(&mut self) {
        self.row = 0;
        self.column = 0;
        self.color_code = ColorCode::DEFAULT;
        self.fill(self.color_code);
        self.sync_cursor();
        log::trace!("display initialized ({}x{})", WIDTH, HEIGHT);
    }

    /// Sets the write color and blanks the screen with it.
    ///
    /// The write position is left where it was.
    pub fn clear(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
        self.fill(self.color_code);
    }

    /// Sets the attribute used by subsequent writes.
    pub fn set_write_color(&mut self, color_code: ColorCode) {
        self.color_code = color_code;
    }

    /// The attribute used by subsequent writes.
    pub fn write_color(&self) -> ColorCode {
        self.color_code
    }

    /// Writes one cell. Does not move the cursor.
    pub fn put_char_at(&mut self, character: u8, color_code: ColorCode, column: usize, row: usize) {
        debug_assert!(row < HEIGHT && column < WIDTH, "cell ({row}, {column}) off screen");
        self.buffer
            .write_cell(row, column, ScreenChar::new(character, color_code));
    }

    /// Writes a byte at the write position and advances it.
    ///
    /// `\n` moves to the start of the next line.
    pub fn put_char(&mut self, character: u8) {
        match character {
            b'\n' => self.new_line(),
            character => {
                self.put_char_at(character, self.color_code, self.column, self.row);
                self.column += 1;
                if self.column == WIDTH {
                    self.new_line();
                }
            }
        }
        self.sync_cursor();
    }

    /// Writes one cell with the current color and moves the hardware cursor
    /// onto it. The write position is not changed.
    pub fn put_char_at_and_move_cursor(&mut self, character: u8, row: usize, column: usize) {
        self.put_char_at(character, self.color_code, column, row);
        self.cursor.set_offset(offset(row, column));
    }

    /// Writes every byte of `s` with [`Display::put_char`].
    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Moves the write position (and hardware cursor) to the top-left cell.
    pub fn home(&mut self) {
        self.row = 0;
        self.column = 0;
        self.sync_cursor();
    }

    /// Current write position as `(row, column)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    /// Reads back the cell at (`row`, `column`).
    pub fn cell(&self, row: usize, column: usize) -> ScreenChar {
        self.buffer.read_cell(row, column)
    }

    /// The underlying text buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// The underlying cursor device.
    pub fn cursor_device(&self) -> &C {
        &self.cursor
    }

    fn new_line(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row == HEIGHT {
            self.row = 0;
        }
    }

    fn fill(&mut self, color_code: ColorCode) {
        let blank = ScreenChar::blank(color_code);
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                self.buffer.write_cell(row, column, blank);
            }
        }
    }

    fn sync_cursor(&mut self) {
        self.cursor.set_offset(offset(self.row, self.column));
    }
}

/// Linear cell offset of (`row`, `column`).
const fn offset(row: usize, column: usize) -> u16 {
    (row * WIDTH + column) as u16
}

impl<B: TextBuffer, C: CursorDevice> fmt::Write for Display<B, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            match byte {
                // Printable ASCII or newline
                0x20..=0x7e | b'\n' => self.put_char(byte),
                // Non-printable: show placeholder
                _ => self.put_char(0xfe),
            }
        }
        Ok(())
    }
}

impl<B: TextBuffer, C: CursorDevice> oops_hal::Console for Display<B, C> {
    fn write_str(&mut self, s: &str) {
        self.write_string(s);
    }

    fn clear(&mut self) {
        self.fill(self.color_code);
    }
}
