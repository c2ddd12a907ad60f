//! Platform identification: probe the host bridge or honor an override
//!
//! Identification either reads the PCI vendor/device pair of the host bridge
//! at 00:00.0 through the [`HardwareAccess`] collaborator, or resolves an
//! explicit platform code against the catalog without touching hardware.
//! Exactly one probe is made per attempt; on an unknown platform the caller
//! decides whether to retry with an override.

use chipmap_core::HardwareAccess;
use chipmap_platforms::{PlatformCatalog, PlatformDescriptor, INTEL_VENDOR_ID};

use crate::error::ChipsetError;

/// How a platform was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentificationOrigin {
    /// Read from the host bridge's PCI configuration space
    Probed,
    /// Taken from the catalog row matching an explicit platform code
    Override,
}

/// Outcome of platform identification
///
/// `vendor_id`/`device_id` are the values actually used: probed from
/// hardware, or copied from the catalog row when an override was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identification {
    /// The resolved catalog row
    pub descriptor: PlatformDescriptor,
    /// PCI vendor ID
    pub vendor_id: u16,
    /// PCI device ID
    pub device_id: u16,
    /// Where the identification came from
    pub origin: IdentificationOrigin,
}

/// Resolves the session's platform against a catalog
pub struct ChipsetIdentifier<'a> {
    catalog: &'a PlatformCatalog,
}

impl<'a> ChipsetIdentifier<'a> {
    /// Create an identifier over a catalog
    pub fn new(catalog: &'a PlatformCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve the platform, probing unless an override code is given
    pub fn identify<H: HardwareAccess>(
        &self,
        hardware: &mut H,
        override_code: Option<&str>,
    ) -> Result<Identification, ChipsetError> {
        if let Some(code) = override_code {
            let descriptor = *self.catalog.lookup_by_code(code)?;
            log::info!(
                "Platform override {:?}: {} with PCI ID {:04x}:{:04x}",
                code,
                descriptor.long_name,
                descriptor.vendor_id,
                descriptor.device_id
            );
            return Ok(Identification {
                descriptor,
                vendor_id: descriptor.vendor_id,
                device_id: descriptor.device_id,
                origin: IdentificationOrigin::Override,
            });
        }

        let (vendor_id, device_id) = hardware.read_pci_vendor_device(0, 0, 0)?;
        if vendor_id != INTEL_VENDOR_ID {
            return Err(ChipsetError::UnsupportedVendor {
                vendor_id,
                device_id,
            });
        }
        let descriptor = *self.catalog.lookup_by_ids(vendor_id, device_id)?;
        log::info!(
            "Found platform \"{}\" with PCI ID {:04x}:{:04x}",
            descriptor.long_name,
            vendor_id,
            device_id
        );
        Ok(Identification {
            descriptor,
            vendor_id,
            device_id,
            origin: IdentificationOrigin::Probed,
        })
    }
}
