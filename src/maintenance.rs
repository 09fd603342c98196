//! Rebooting into the USB bootloader (BOOTSEL) for reprogramming.

/// One-way exit from the firmware into a maintenance mode.
pub trait Maintenance {
    /// Leave normal operation. Never returns.
    fn enter_bootloader(&mut self) -> !;
}

/// Reboots through the boot ROM into USB mass-storage mode, ready for a new UF2 image.
#[cfg(not(feature = "host"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct UsbBoot;

#[cfg(not(feature = "host"))]
impl Maintenance for UsbBoot {
    fn enter_bootloader(&mut self) -> ! {
        defmt::info!("UsbBoot: rebooting into BOOTSEL");
        // No activity LED, all USB interfaces enabled.
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
        loop {
            core::hint::spin_loop();
        }
    }
}
