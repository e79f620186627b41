//! Boot-time screen output.

pub mod banner;

use crate::display::Display;
use oops_hal::{CursorDevice, TextBuffer};

/// Shown on the last banner line until the shell is started.
pub const START_HINT: &str = "   Press ENTER to start...";

/// Blanks the display and draws the welcome screen: logo, version, and the
/// start hint with the cursor left after it.
pub fn show_welcome<B: TextBuffer, C: CursorDevice>(display: &mut Display<B, C>) {
    display.initialize();
    banner::print_banner(display);
    display.write_string(START_HINT);
    log::info!("welcome screen shown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::WIDTH;
    use crate::testutil::mock::{MemoryBuffer, MockCursor};
    use oops_common::{Color, ColorCode};

    fn row_string(display: &Display<MemoryBuffer, MockCursor>, row: usize) -> String {
        (0..WIDTH)
            .map(|column| display.cell(row, column).ascii_character as char)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_welcome_screen_layout() {
        let mut display = Display::new(MemoryBuffer::new(), MockCursor::new());
        show_welcome(&mut display);

        for (row, line) in banner::LOGO.iter().enumerate() {
            assert_eq!(row_string(&display, row), *line);
        }
        assert_eq!(row_string(&display, 6), banner::VERSION_LINE);
        assert_eq!(row_string(&display, 7), START_HINT);
        assert_eq!(display.position(), (7, START_HINT.len()));
    }

    #[test]
    fn test_welcome_screen_is_white_on_black() {
        let mut display = Display::new(MemoryBuffer::new(), MockCursor::new());
        show_welcome(&mut display);

        let white = ColorCode::new(Color::White, Color::Black);
        assert!(display.buffer().cells().all(|cell| cell.color_code == white));
        assert_eq!(display.write_color(), white);
    }

    #[test]
    fn test_version_line_keeps_credit() {
        assert!(banner::VERSION_LINE.starts_with("   OopsOS v"));
        assert!(banner::VERSION_LINE.ends_with(" (c) 2025 squach90"));
    }
}
