//! Compile-time kernel configuration.

use crate::input::scancode;
use log::LevelFilter;
use oops_common::Color;

/// Serial log level.
#[cfg(feature = "verbose-log")]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Serial log level.
#[cfg(not(feature = "verbose-log"))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Shell appearance and behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Marker printed at the start of each input line.
    pub prompt: &'static str,
    /// Make code that leaves the welcome screen.
    pub start_key: u8,
    /// Foreground the screen is cleared to when the shell starts.
    pub foreground: Color,
    /// Background the screen is cleared to when the shell starts.
    pub background: Color,
}

impl ShellConfig {
    /// The stock shell: `> ` prompt, started with Enter, white on black.
    pub const DEFAULT: ShellConfig = ShellConfig {
        prompt: "> ",
        start_key: scancode::ENTER,
        foreground: Color::White,
        background: Color::Black,
    };
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig::DEFAULT
    }
}
