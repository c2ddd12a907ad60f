//! Common register baseline
//!
//! The conservative ICH-era map shared by every cataloged platform. SPI
//! registers are relative to SPIBAR (inside RCBA on PCH platforms, see
//! `SPIBAR_OFFSET`); BIOS_CNTL and RCBA live in the LPC bridge at 00:1f.0.

use chipmap_core::{ConfigError, ConfigLayer};

use super::{mmio_register, pci_register};

pub(super) fn layer() -> Result<ConfigLayer, ConfigError> {
    let mut layer = ConfigLayer::common();

    layer.add_constant("PCI_BUS0", 0x00)?;
    // SPI registers sit at this offset inside RCBA
    layer.add_constant("SPIBAR_OFFSET", 0x3800)?;

    // LPC bridge (00:1f.0)
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
        ],
    )?)?;
    layer.add_register(pci_register(
        "RCBA",
        0,
        31,
        0,
        0xF0,
        32,
        &[
            ("EN", 0, 1, "Enable"),
            ("BA", 14, 18, "Base Address"),
        ],
    )?)?;

    // Host bridge (00:00.0)
    layer.add_register(pci_register(
        "SMRAMC",
        0,
        0,
        0,
        0x88,
        8,
        &[
            ("C_BASE_SEG", 0, 3, "Compatible SMM Space Base Segment"),
            ("G_SMRAME", 3, 1, "Global SMRAM Enable"),
            ("D_LCK", 4, 1, "SMM Space Locked"),
            ("D_CLS", 5, 1, "SMM Space Closed"),
            ("D_OPEN", 6, 1, "SMM Space Open"),
        ],
    )?)?;

    // SPI controller (SPIBAR-relative)
    layer.add_register(mmio_register(
        "HSFS",
        0x04,
        16,
        &[
            ("FDONE", 0, 1, "Flash Cycle Done"),
            ("FCERR", 1, 1, "Flash Cycle Error"),
            ("AEL", 2, 1, "Access Error Log"),
            ("BERASE", 3, 2, "Block/Sector Erase Size"),
            ("SCIP", 5, 1, "SPI Cycle In Progress"),
            ("FDOPSS", 13, 1, "Flash Descriptor Override Pin-Strap Status"),
            ("FDV", 14, 1, "Flash Descriptor Valid"),
            ("FLOCKDN", 15, 1, "Flash Configuration Lock-Down"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "HSFC",
        0x06,
        16,
        &[
            ("FGO", 0, 1, "Flash Cycle Go"),
            ("FCYCLE", 1, 2, "Flash Cycle"),
            ("FDBC", 8, 6, "Flash Data Byte Count"),
            ("SME", 15, 1, "SPI SMI# Enable"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "FADDR",
        0x08,
        32,
        &[("FLA", 0, 25, "Flash Linear Address")],
    )?)?;
    layer.add_register(mmio_register(
        "FRAP",
        0x50,
        32,
        &[
            ("BRRA", 0, 8, "BIOS Region Read Access"),
            ("BRWA", 8, 8, "BIOS Region Write Access"),
            ("BMRAG", 16, 8, "BIOS Master Read Access Grant"),
            ("BMWAG", 24, 8, "BIOS Master Write Access Grant"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "FREG0",
        0x54,
        32,
        &[
            ("RB", 0, 15, "Region Base"),
            ("RL", 16, 15, "Region Limit"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "FREG1",
        0x58,
        32,
        &[
            ("RB", 0, 15, "Region Base"),
            ("RL", 16, 15, "Region Limit"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "PR0",
        0x74,
        32,
        &[
            ("PRB", 0, 15, "Protected Range Base"),
            ("RPE", 15, 1, "Read Protection Enable"),
            ("PRL", 16, 15, "Protected Range Limit"),
            ("WPE", 31, 1, "Write Protection Enable"),
        ],
    )?)?;
    layer.add_register(mmio_register(
        "SSFS",
        0x90,
        8,
        &[
            ("SCIP", 0, 1, "SPI Cycle In Progress"),
            ("FDONE", 2, 1, "Cycle Done Status"),
            ("FCERR", 3, 1, "Flash Cycle Error"),
            ("AEL", 4, 1, "Access Error Log"),
        ],
    )?)?;
    layer.add_register(mmio_register("PREOP", 0x94, 16, &[])?)?;
    layer.add_register(mmio_register("OPTYPE", 0x96, 16, &[])?)?;
    layer.add_register(mmio_register("OPMENU", 0x98, 64, &[])?)?;

    Ok(layer)
}
