//! Architecture-specific implementations.
//!
//! Everything here touches real hardware: VGA memory, I/O ports, the UART.
//! Only x86_64 exists.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use x86_64::*;
