//! chipmap - Intel platform identification and register map resolution
//!
//! chipmap answers two questions for low-level platform tooling:
//! *what machine is this*, and *what do its registers look like*. The
//! platform is identified by the PCI vendor/device pair of the host bridge
//! at 00:00.0 (or an explicit platform-code override), then resolved into an
//! effective register map: a common baseline of bit-exact register
//! definitions overlaid with the platform's own redefinitions.
//!
//! # Overview
//!
//! ```ignore
//! use chipmap::{Chipset, InitOptions};
//!
//! let mut chipset = Chipset::new(hardware);
//! chipset.init(InitOptions::new())?;
//!
//! let bios_cntl = chipset.get_register("BIOS_CNTL")?;
//! if let Some(smm_bwp) = bios_cntl.field("SMM_BWP") {
//!     println!("SMM_BWP mask: {:#x}", smm_bwp.mask());
//! }
//!
//! chipset.destroy()?;
//! ```
//!
//! Hardware I/O itself stays behind the [`HardwareAccess`] capability;
//! chipmap makes exactly one PCI probe per init attempt and performs no
//! other I/O. Platform and register tables are compiled in; see
//! [`INTEL_PLATFORMS`] for the supported platforms and
//! `chipmap_platforms::cfg` for the builtin register layers.
//!
//! # Supported platforms
//!
//! Sandy Bridge through Broadwell (desktop, mobile and server SKUs), plus
//! the Bay Trail, Avoton and Quark SoCs. A platform without its own
//! configuration layer resolves to the common baseline.

pub mod chipset;
pub mod error;
pub mod identify;

pub use chipmap_core::{
    ConfigError, ConfigLayer, ConfigRegistry, HardwareAccess, HardwareError, RegisterDefinition,
    RegisterField, RegisterLocation, ResolvedConfig, Scope,
};
pub use chipmap_platforms::{
    default_registry, intel_catalog, CatalogError, PlatformCatalog, PlatformDescriptor,
    PlatformFamily, UnknownPlatform, INTEL_PLATFORMS, INTEL_VENDOR_ID,
};

pub use chipset::{Chipset, InitOptions};
pub use error::ChipsetError;
pub use identify::{ChipsetIdentifier, Identification, IdentificationOrigin};

/// Result type for chipmap operations
pub type Result<T> = core::result::Result<T, ChipsetError>;
