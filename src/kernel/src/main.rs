//! OopsOS Kernel Entry Point

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::fmt::Write;
    use core::panic::PanicInfo;
    use oops_common::{Color, ColorCode};
    use oops_kernel::arch::x86_64::{self, VgaBuffer, X86Ports};
    use oops_kernel::config::ShellConfig;
    use oops_kernel::display::{CrtcCursor, Display};
    use oops_kernel::terminal::{LogLines, Shell};
    use oops_kernel::{boot, serial_println};

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        // SAFETY: first and only call, in ring 0; the bootloader identity-maps
        // the VGA buffer.
        let (mut display, mut keyboard) = unsafe { oops_kernel::init() };

        boot::show_welcome(&mut display);

        Shell::new(ShellConfig::DEFAULT, LogLines).run(&mut keyboard, &mut display)
    }

    /// Panic handler.
    ///
    /// Called when the kernel encounters an unrecoverable error.
    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // SAFETY: nothing else runs after a panic, so taking the screen over
        // from the shell's display cannot race with it.
        let mut display = unsafe { Display::new(VgaBuffer::new(), CrtcCursor::new(X86Ports::new())) };
        display.set_write_color(ColorCode::new(Color::LightRed, Color::Black));
        display.write_string("\n\n!!! KERNEL PANIC !!!\n");
        display.set_write_color(ColorCode::DEFAULT);
        let _ = write!(display, "{}", info);

        x86_64::halt_loop()
    }
}

// Host builds only check the library; the kernel image needs a bare-metal target.
#[cfg(not(target_os = "none"))]
fn main() {}
