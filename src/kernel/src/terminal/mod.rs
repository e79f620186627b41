//! Terminal subsystem for OopsOS.
//!
//! Ties keyboard input to the display.
//!
//! # Architecture
//!
//! - `shell`: welcome/read-loop state machine
//! - `line`: captured line text and the [`LineSink`] hand-off

pub mod line;
pub mod shell;

pub use line::{LineBuffer, LineSink, LogLines};
pub use shell::{Phase, Shell};
