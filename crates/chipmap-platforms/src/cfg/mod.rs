//! Builtin register configuration layers
//!
//! One module per scope: [`common`] carries the baseline every platform
//! shares, and each platform module carries whole-register redefinitions and
//! additions for its generation. A platform that matches the baseline
//! exactly (Jaketown, Ivy Town, Avoton, Haswell-EP, Broadwell, Quark) has no
//! module and resolves to the common view.
//!
//! Register offsets and bit layouts follow the Intel ICH/PCH datasheets;
//! the SPI registers are given relative to the SPIBAR MMIO region.

use chipmap_core::{
    ConfigError, ConfigRegistry, RegisterDefinition, RegisterField, RegisterLocation,
};
use once_cell::sync::Lazy;

mod byt;
mod common;
mod hsw;
mod ivb;
mod snb;

/// Build the builtin configuration registry
pub fn build_registry() -> Result<ConfigRegistry, ConfigError> {
    let mut registry = ConfigRegistry::new();
    registry.register_common_layer(common::layer()?)?;
    registry.register_platform_layer("snb", snb::layer()?)?;
    registry.register_platform_layer("ivb", ivb::layer()?)?;
    registry.register_platform_layer("hsw", hsw::layer()?)?;
    registry.register_platform_layer("byt", byt::layer()?)?;
    Ok(registry)
}

static REGISTRY: Lazy<ConfigRegistry> =
    Lazy::new(|| build_registry().expect("builtin register tables are internally consistent"));

/// The builtin configuration registry
pub fn default_registry() -> &'static ConfigRegistry {
    &REGISTRY
}

/// Build a PCI configuration space register from a field table
pub(crate) fn pci_register(
    name: &str,
    bus: u8,
    device: u8,
    function: u8,
    offset: u16,
    width_bits: u32,
    fields: &[(&str, u32, u32, &str)],
) -> Result<RegisterDefinition, ConfigError> {
    RegisterDefinition::new(
        name,
        RegisterLocation::Pci {
            bus,
            device,
            function,
            offset,
        },
        width_bits,
        build_fields(fields)?,
    )
}

/// Build an MMIO-relative register from a field table
pub(crate) fn mmio_register(
    name: &str,
    offset: u64,
    width_bits: u32,
    fields: &[(&str, u32, u32, &str)],
) -> Result<RegisterDefinition, ConfigError> {
    RegisterDefinition::new(
        name,
        RegisterLocation::Mmio { offset },
        width_bits,
        build_fields(fields)?,
    )
}

fn build_fields(fields: &[(&str, u32, u32, &str)]) -> Result<Vec<RegisterField>, ConfigError> {
    fields
        .iter()
        .map(|(name, bit_offset, bit_width, description)| {
            RegisterField::new(*name, *bit_offset, *bit_width, *description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipmap_core::RegisterLocation;

    #[test]
    fn builtin_registry_builds() {
        build_registry().unwrap();
    }

    #[test]
    fn haswell_gains_smm_bwp() {
        let resolved = default_registry().resolve("hsw");
        let bios_cntl = resolved.get_register("BIOS_CNTL").unwrap();
        assert!(bios_cntl.field("SMM_BWP").is_some());
        assert_eq!(bios_cntl.field("SMM_BWP").unwrap().bit_offset(), 5);
        // the baseline entries pass through untouched
        assert!(resolved.get_register("HSFS").is_ok());
        assert_eq!(resolved.get_constant("SPIBAR_OFFSET").unwrap(), 0x3800);
    }

    #[test]
    fn baseline_has_no_smm_bwp() {
        // Jaketown has no override layer and resolves to the baseline
        let resolved = default_registry().resolve("jkt");
        let bios_cntl = resolved.get_register("BIOS_CNTL").unwrap();
        assert!(bios_cntl.field("SMM_BWP").is_none());
        assert!(bios_cntl.field("BIOSWE").is_some());
    }

    #[test]
    fn bay_trail_moves_bios_control_to_mmio() {
        let resolved = default_registry().resolve("byt");
        let bios_cntl = resolved.get_register("BIOS_CNTL").unwrap();
        assert_eq!(bios_cntl.location(), RegisterLocation::Mmio { offset: 0xFC });
        assert_eq!(bios_cntl.width_bits(), 32);
        assert!(bios_cntl.field("SMM_BWP").is_some());
        // SPI registers sit directly at SBASE on Bay Trail
        assert_eq!(resolved.get_constant("SPIBAR_OFFSET").unwrap(), 0);
        assert!(resolved.get_register("SBASE").is_ok());
    }

    #[test]
    fn hsfs_layout_matches_the_datasheet() {
        let resolved = default_registry().resolve("hsw");
        let hsfs = resolved.get_register("HSFS").unwrap();
        assert_eq!(hsfs.width_bits(), 16);
        assert_eq!(hsfs.field("FDONE").unwrap().bit_offset(), 0);
        assert_eq!(hsfs.field("FCERR").unwrap().bit_offset(), 1);
        assert_eq!(hsfs.field("BERASE").unwrap().bit_width(), 2);
        assert_eq!(hsfs.field("SCIP").unwrap().bit_offset(), 5);
        assert_eq!(hsfs.field("FLOCKDN").unwrap().mask(), 0x8000);
    }
}
