//! Error type for platform resolution and the chipset handle

use thiserror::Error;

use chipmap_core::{ConfigError, HardwareError};
use chipmap_platforms::UnknownPlatform;

/// Errors surfaced by identification and the [`Chipset`](crate::Chipset)
/// handle
///
/// Identification errors (`UnsupportedVendor`, `UnknownPlatform`) are
/// recoverable at the caller's discretion, typically by retrying with an
/// explicit platform override. The rest are usage or collaborator errors and
/// are propagated as-is; a silently misidentified platform would make every
/// downstream register read suspect, so nothing here is swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChipsetError {
    /// The probed host bridge is not an Intel device
    #[error("unsupported vendor {vendor_id:04x} (device {device_id:04x}): only Intel platforms are cataloged")]
    UnsupportedVendor {
        /// Probed PCI vendor ID
        vendor_id: u16,
        /// Probed PCI device ID
        device_id: u16,
    },

    /// The probed device or requested code matched no catalog row
    #[error(transparent)]
    UnknownPlatform(#[from] UnknownPlatform),

    /// Accessor called before `init()` or after `destroy()`
    #[error("chipset handle is not initialized")]
    NotInitialized,

    /// `init()` called on a handle that is already initialized
    #[error("chipset handle is already initialized")]
    AlreadyInitialized,

    /// Register/constant lookup or configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The hardware access collaborator failed
    #[error(transparent)]
    Hardware(#[from] HardwareError),
}
