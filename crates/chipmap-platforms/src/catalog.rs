//! Platform catalog: the (vendor, device) → descriptor table and lookups

use thiserror::Error;

use crate::descriptor::PlatformDescriptor;

/// Errors while building a catalog
///
/// Both variants indicate a programming error in a static table and are
/// fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two rows share a (vendor, device) pair
    #[error("duplicate platform entry for PCI ID {vendor_id:04x}:{device_id:04x}")]
    DuplicateDevice {
        /// PCI vendor ID
        vendor_id: u16,
        /// PCI device ID
        device_id: u16,
    },

    /// Two rows share a code (case-insensitive)
    #[error("duplicate platform code {code:?}")]
    DuplicateCode {
        /// The colliding code
        code: String,
    },
}

/// A platform lookup that found no row, carrying what was looked up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownPlatform {
    /// No row for this (vendor, device) pair
    #[error("no supported platform with PCI ID {vendor_id:04x}:{device_id:04x}")]
    Device {
        /// PCI vendor ID that was probed
        vendor_id: u16,
        /// PCI device ID that was probed
        device_id: u16,
    },

    /// No row for this platform code
    #[error("unrecognized platform code {code:?}")]
    Code {
        /// The code that was requested
        code: String,
    },
}

/// Static table of supported platforms
///
/// Rows are unique by (vendor, device) pair and by code (case-insensitive);
/// both are enforced when the catalog is built, so lookups never need
/// tie-breaking. Iteration order is insertion order, which backs
/// "list supported platforms" reporting.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    entries: Vec<PlatformDescriptor>,
}

impl PlatformCatalog {
    /// Build a catalog, validating the uniqueness invariants
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = PlatformDescriptor>,
    {
        let mut entries: Vec<PlatformDescriptor> = Vec::new();
        for descriptor in descriptors {
            if entries
                .iter()
                .any(|e| e.matches_ids(descriptor.vendor_id, descriptor.device_id))
            {
                return Err(CatalogError::DuplicateDevice {
                    vendor_id: descriptor.vendor_id,
                    device_id: descriptor.device_id,
                });
            }
            if entries.iter().any(|e| e.matches_code(descriptor.code)) {
                return Err(CatalogError::DuplicateCode {
                    code: descriptor.code.to_string(),
                });
            }
            entries.push(descriptor);
        }
        Ok(Self { entries })
    }

    /// Find the platform for a probed (vendor, device) pair
    pub fn lookup_by_ids(
        &self,
        vendor_id: u16,
        device_id: u16,
    ) -> Result<&PlatformDescriptor, UnknownPlatform> {
        self.entries
            .iter()
            .find(|e| e.matches_ids(vendor_id, device_id))
            .ok_or(UnknownPlatform::Device {
                vendor_id,
                device_id,
            })
    }

    /// Find the platform for an override code (case-insensitive)
    pub fn lookup_by_code(&self, code: &str) -> Result<&PlatformDescriptor, UnknownPlatform> {
        self.entries
            .iter()
            .find(|e| e.matches_code(code))
            .ok_or_else(|| UnknownPlatform::Code {
                code: code.to_string(),
            })
    }

    /// All rows, in insertion order
    pub fn descriptors(&self) -> impl Iterator<Item = &PlatformDescriptor> {
        self.entries.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
