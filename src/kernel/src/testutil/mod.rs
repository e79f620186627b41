//! Test infrastructure for the OopsOS kernel.
//!
//! Two halves:
//!
//! - [`mock`]: in-memory stand-ins for the VGA buffer, the cursor and the
//!   port space, used by host unit tests (and by other crates with the `test`
//!   feature).
//! - QEMU helpers for bare-metal integration tests in `tests/`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use oops_kernel::testutil::{QemuExitCode, exit_qemu, test_runner, Testable};
//! ```

#[cfg(any(test, feature = "test"))]
pub mod mock;

use crate::serial_println;

/// Port of QEMU's isa-debug-exit device.
pub const QEMU_EXIT_PORT: u16 = 0xf4;

/// QEMU exit codes for signaling test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum QemuExitCode {
    /// All tests passed.
    Success = 0x10,
    /// One or more tests failed.
    Failed = 0x11,
}

/// Exit QEMU with the given exit code.
///
/// QEMU must be started with `-device isa-debug-exit,iobase=0xf4,iosize=0x04`.
/// The process exit status is `(value << 1) | 1`: 33 for `Success`, 35 for
/// `Failed`.
pub fn exit_qemu(exit_code: QemuExitCode) {
    use crate::arch::x86_64::X86Ports;
    use oops_hal::PortIo;

    // SAFETY: only called from bare-metal test binaries, in ring 0; the
    // debug-exit device has no other user.
    let mut ports = unsafe { X86Ports::new() };
    ports.write_u8(QEMU_EXIT_PORT, exit_code as u8);
}

/// Trait for types that can be run as tests.
pub trait Testable {
    /// Run the test and report results.
    fn run(&self);
}

impl<T: Fn()> Testable for T {
    fn run(&self) {
        serial_println!("test {} ... ", core::any::type_name::<T>());
        self();
        serial_println!("[ok]");
    }
}

/// Custom test runner for bare-metal tests.
///
/// ```rust,ignore
/// #![feature(custom_test_frameworks)]
/// #![test_runner(oops_kernel::testutil::test_runner)]
/// ```
pub fn test_runner(tests: &[&dyn Testable]) {
    serial_println!("Running {} tests", tests.len());
    for test in tests {
        test.run();
    }
    exit_qemu(QemuExitCode::Success);
}

/// Panic handler body for test binaries: reports the failure on serial and
/// exits QEMU with `Failed`.
pub fn test_panic_handler(info: &core::panic::PanicInfo) -> ! {
    serial_println!("[failed]");
    serial_println!("Error: {}", info);
    exit_qemu(QemuExitCode::Failed);
    crate::arch::x86_64::halt_loop()
}
