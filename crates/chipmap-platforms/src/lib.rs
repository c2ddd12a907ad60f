//! chipmap-platforms - Intel platform catalog and builtin register tables
//!
//! This crate carries the static data behind platform resolution:
//!
//! - [`PlatformDescriptor`] / [`PlatformFamily`]: typed catalog rows keyed by
//!   the host bridge's PCI (vendor, device) pair.
//! - [`PlatformCatalog`]: uniqueness-validated lookup table with stable
//!   enumeration order for "list supported platforms" reporting.
//! - [`INTEL_PLATFORMS`] / [`intel_catalog`]: the builtin Intel table,
//!   Sandy Bridge through Broadwell plus the Bay Trail/Avoton/Quark SoCs.
//! - [`cfg`]: the builtin common + per-platform register layers and
//!   [`default_registry`].
//!
//! All tables are compiled in; nothing is loaded from external files.

pub mod catalog;
pub mod cfg;
pub mod descriptor;
pub mod intel;

pub use catalog::{CatalogError, PlatformCatalog, UnknownPlatform};
pub use cfg::{build_registry, default_registry};
pub use descriptor::{PlatformDescriptor, PlatformFamily};
pub use intel::{intel_catalog, INTEL_PLATFORMS, INTEL_VENDOR_ID};
