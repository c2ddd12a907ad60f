//! Bay Trail SoC overrides
//!
//! Bay Trail has no RCBA: the SPI registers sit directly at the base held in
//! SBASE (00:1f.0 +0x54), and BIOS control moves out of PCI configuration
//! space into the BCR at SBASE+0xFC.

use chipmap_core::{ConfigError, ConfigLayer};

use super::{mmio_register, pci_register};

pub(super) fn layer() -> Result<ConfigLayer, ConfigError> {
    let mut layer = ConfigLayer::for_platform("byt");

    // BCR replaces the LPC BIOS_CNTL wholesale, location included
    layer.add_register(mmio_register(
        "BIOS_CNTL",
        0xFC,
        32,
        &[
            ("BIOSWE", 0, 1, "BIOS Write Enable"),
            ("BLE", 1, 1, "BIOS Lock Enable"),
            ("SRC", 2, 2, "SPI Read Configuration"),
            ("TSS", 4, 1, "Top Swap Status"),
            ("SMM_BWP", 5, 1, "SMM BIOS Write Protect"),
        ],
    )?)?;
    layer.add_register(pci_register(
        "SBASE",
        0,
        31,
        0,
        0x54,
        32,
        &[
            ("MEMI", 0, 1, "Memory Space Indicator"),
            ("ADDRNG", 1, 1, "Address Range"),
            ("PREF", 2, 1, "Prefetchable"),
            ("BASE", 9, 23, "SPI Base Address"),
        ],
    )?)?;
    layer.add_constant("SPIBAR_OFFSET", 0x0)?;

    Ok(layer)
}
