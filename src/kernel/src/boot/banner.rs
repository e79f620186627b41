//! Boot banner and branding.

use crate::display::Display;
use oops_hal::{CursorDevice, TextBuffer};

/// The OopsOS logo, one entry per screen row.
pub const LOGO: [&str; 6] = [
    "   ___                   ___  ____",
    "  / _ \\  ___  _ __  ___ / _ \\/ ___|",
    " | | | |/ _ \\| '_ \\/ __| | | \\___ \\",
    " | |_| | (_) | |_) \\__ \\ |_| |___) |",
    "  \\___/ \\___/| .__/|___/\\___/|____/",
    "             |_|",
];

/// Version line shown under the logo.
pub const VERSION_LINE: &str = concat!("   OopsOS v", env!("CARGO_PKG_VERSION"), " (c) 2025 squach90");

/// Print the OopsOS boot banner in the current write color.
pub fn print_banner<B: TextBuffer, C: CursorDevice>(display: &mut Display<B, C>) {
    for line in LOGO {
        display.write_string(line);
        display.put_char(b'\n');
    }
    display.write_string(VERSION_LINE);
    display.put_char(b'\n');
}
