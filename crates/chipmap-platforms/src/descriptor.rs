//! Platform descriptors and family identifiers

use std::fmt;

/// Intel platform family
///
/// The discriminants are stable across releases so callers can compare and
/// persist them. Several catalog rows may share a family (e.g. the desktop,
/// mobile and ULT Haswell SKUs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PlatformFamily {
    /// Placeholder before identification
    Unknown = 0,
    /// 2nd generation Core (Sandy Bridge CPU, 6 Series PCH)
    SandyBridge = 1,
    /// Xeon E5 (Sandy Bridge-EP, Jaketown)
    Jaketown = 2,
    /// 3rd generation Core (Ivy Bridge CPU, 7 Series PCH)
    IvyBridge = 3,
    /// Xeon E5 v2 (Ivy Bridge-EP, Ivy Town)
    IvyTown = 4,
    /// 4th generation Core (Haswell CPU, 8 Series PCH)
    Haswell = 5,
    /// Atom E3800 / Z3000 SoC (Bay Trail)
    BayTrail = 6,
    /// Quark SoC X1000 (Galileo)
    Quark = 7,
    /// Atom C2000 SoC (Avoton/Rangeley)
    Avoton = 8,
    /// Xeon E5 v3 (Haswell-EP)
    HaswellServer = 9,
    /// 5th generation Core (Broadwell CPU, 9 Series PCH)
    Broadwell = 10,
}

impl PlatformFamily {
    /// Stable numeric identifier for programmatic comparison
    pub const fn numeric_id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::SandyBridge => write!(f, "Sandy Bridge"),
            Self::Jaketown => write!(f, "Jaketown"),
            Self::IvyBridge => write!(f, "Ivy Bridge"),
            Self::IvyTown => write!(f, "Ivy Town"),
            Self::Haswell => write!(f, "Haswell"),
            Self::BayTrail => write!(f, "Bay Trail"),
            Self::Quark => write!(f, "Quark"),
            Self::Avoton => write!(f, "Avoton"),
            Self::HaswellServer => write!(f, "Haswell-EP"),
            Self::Broadwell => write!(f, "Broadwell"),
        }
    }
}

/// One row of the platform catalog
///
/// A platform is keyed by the host bridge's PCI (vendor, device) pair; the
/// short `code` doubles as the case-insensitive override string accepted on
/// the command line of embedding tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// PCI vendor ID of the host bridge
    pub vendor_id: u16,
    /// PCI device ID of the host bridge
    pub device_id: u16,
    /// Short platform code, e.g. "hsw"
    pub code: &'static str,
    /// Platform name, e.g. "Haswell"
    pub name: &'static str,
    /// Marketing-grade long name
    pub long_name: &'static str,
    /// Platform family
    pub family: PlatformFamily,
}

impl PlatformDescriptor {
    /// Create a new catalog row
    pub const fn new(
        vendor_id: u16,
        device_id: u16,
        code: &'static str,
        name: &'static str,
        long_name: &'static str,
        family: PlatformFamily,
    ) -> Self {
        Self {
            vendor_id,
            device_id,
            code,
            name,
            long_name,
            family,
        }
    }

    /// Check if this row matches a (vendor, device) pair
    pub fn matches_ids(&self, vendor_id: u16, device_id: u16) -> bool {
        self.vendor_id == vendor_id && self.device_id == device_id
    }

    /// Check if this row matches a platform code (case-insensitive)
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for PlatformDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:04x}:{:04x})",
            self.name, self.vendor_id, self.device_id
        )
    }
}
