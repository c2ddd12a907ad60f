//! Ivy Bridge (Panther Point PCH) overrides

use chipmap_core::{ConfigError, ConfigLayer};

use super::pci_register;

pub(super) fn layer() -> Result<ConfigLayer, ConfigError> {
    let mut layer = ConfigLayer::for_platform("ivb");

    layer.add_register(pci_register(
        "BIOS_CNTL",
        0,
        31,
        0,
        0xDC,
        8,
        &[
            ("BIOSWE", 0, 1, "BIOS Write Enable"),
            ("BLE", 1, 1, "BIOS Lock Enable"),
            ("SRC", 2, 2, "SPI Read Configuration"),
            ("TSS", 4, 1, "Top Swap Status"),
            ("SMM_BWP", 5, 1, "SMM BIOS Write Protect"),
        ],
    )?)?;

    Ok(layer)
}
