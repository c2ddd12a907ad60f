//! chipmap-core - register data model and layered platform configuration
//!
//! This crate holds the data model the rest of chipmap is built on:
//!
//! - [`RegisterField`] / [`RegisterDefinition`]: validated, immutable,
//!   bit-exact register descriptions.
//! - [`ConfigLayer`]: one scope's registers and constants (the common
//!   baseline or a single platform's overrides), frozen after build.
//! - [`ConfigRegistry`]: composes common + platform layers and resolves the
//!   effective register map by whole-register replacement.
//! - [`HardwareAccess`]: the capability trait through which identification
//!   probes PCI configuration space.
//!
//! Nothing in here performs I/O; hardware access lives behind the
//! [`HardwareAccess`] seam.

pub mod error;
pub mod hardware;
pub mod layer;
pub mod register;
pub mod registry;

pub use error::ConfigError;
pub use hardware::{HardwareAccess, HardwareError};
pub use layer::{ConfigLayer, Scope};
pub use register::{RegisterDefinition, RegisterField, RegisterLocation};
pub use registry::{ConfigRegistry, ResolvedConfig};

/// Result type for configuration-model operations
pub type Result<T> = core::result::Result<T, ConfigError>;
