//! Kernel log over the serial port.
//!
//! Implements the `log` facade; records go to COM1 as
//! `[LEVEL] target: message`. The VGA screen is never used for logging.

use core::fmt;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// `log` backend writing to COM1.
pub struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

/// `fmt::Write` adapter over the serial port.
struct SerialWriter;

impl fmt::Write for SerialWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        crate::serial_print!("{}", s);
        Ok(())
    }
}

/// Formats one record as a single `[LEVEL] target: message` line.
pub(crate) fn write_record(out: &mut impl fmt::Write, record: &Record) -> fmt::Result {
    writeln!(out, "[{:<5}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Nowhere to report a failed log write.
            let _ = write_record(&mut SerialWriter, record);
        }
    }

    fn flush(&self) {}
}

/// Installs the serial logger and sets the maximum level.
///
/// Fails if a logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    crate::arch::x86_64::serial::init();
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn render(level: Level, target: &str, args: fmt::Arguments) -> String {
        let mut out = String::new();
        let record = Record::builder().args(args).level(level).target(target).build();
        write_record(&mut out, &record).unwrap();
        out
    }

    #[test]
    fn test_record_line_format() {
        assert_eq!(
            render(Level::Warn, "oops_kernel::terminal", format_args!("line buffer full")),
            "[WARN ] oops_kernel::terminal: line buffer full\n"
        );
    }

    #[test]
    fn test_level_is_padded_to_five() {
        assert_eq!(
            render(Level::Info, "oops_kernel::terminal::line", format_args!("line submitted: {:?}", "hi")),
            "[INFO ] oops_kernel::terminal::line: line submitted: \"hi\"\n"
        );
        assert_eq!(
            render(Level::Error, "oops_kernel", format_args!("x")),
            "[ERROR] oops_kernel: x\n"
        );
    }
}
