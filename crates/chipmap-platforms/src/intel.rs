//! Builtin Intel platform table
//!
//! Platforms are keyed by the device ID of the host bridge at PCI 00:00.0.
//! Several SKUs of one family identify with different device IDs but share
//! a code; each keeps its own row so the exact SKU stays reportable.

use once_cell::sync::Lazy;

use crate::catalog::PlatformCatalog;
use crate::descriptor::{PlatformDescriptor, PlatformFamily};

/// Intel PCI vendor ID
pub const INTEL_VENDOR_ID: u16 = 0x8086;

/// Supported Intel platforms
pub static INTEL_PLATFORMS: &[PlatformDescriptor] = &[
    // Sandy Bridge (2nd generation Core, 6 Series / C200 PCH)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0100,
        "snb",
        "Sandy Bridge",
        "Desktop 2nd Generation Core Processor (Sandy Bridge CPU / Cougar Point PCH)",
        PlatformFamily::SandyBridge,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0104,
        "snb_m",
        "Sandy Bridge",
        "Mobile 2nd Generation Core Processor (Sandy Bridge CPU / Cougar Point PCH)",
        PlatformFamily::SandyBridge,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0108,
        "snb_s",
        "Sandy Bridge",
        "Intel Xeon Processor E3-1200 (Sandy Bridge CPU, C200 Series PCH)",
        PlatformFamily::SandyBridge,
    ),
    // Jaketown (Sandy Bridge-EP)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x3C00,
        "jkt",
        "Jaketown",
        "Server 2nd Generation Core Processor (Sandy Bridge CPU, C600 Series PCH)",
        PlatformFamily::Jaketown,
    ),
    // Ivy Bridge (3rd generation Core, 7 Series / C216 PCH)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0150,
        "ivb",
        "Ivy Bridge",
        "Desktop 3rd Generation Core Processor (Ivy Bridge CPU / Panther Point PCH)",
        PlatformFamily::IvyBridge,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0154,
        "ivb_m",
        "Ivy Bridge",
        "Mobile 3rd Generation Core Processor (Ivy Bridge CPU / Panther Point PCH)",
        PlatformFamily::IvyBridge,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0158,
        "ivb_s",
        "Ivy Bridge",
        "Intel Xeon Processor E3-1200 v2 (Ivy Bridge CPU, C216 Series PCH)",
        PlatformFamily::IvyBridge,
    ),
    // Ivy Town (Ivy Bridge-EP)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0E00,
        "ivt",
        "Ivy Town",
        "Server 3rd Generation Core Processor (Ivy Bridge CPU, C600/C610 Series PCH)",
        PlatformFamily::IvyTown,
    ),
    // Haswell (4th generation Core, 8 Series PCH)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0C00,
        "hsw",
        "Haswell",
        "Desktop 4th Generation Core Processor (Haswell CPU / Lynx Point PCH)",
        PlatformFamily::Haswell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0C04,
        "hsw_m",
        "Haswell",
        "Mobile 4th Generation Core Processor (Haswell CPU / Lynx Point PCH)",
        PlatformFamily::Haswell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0A00,
        "hsw_u",
        "Haswell",
        "4th Generation Core Processor (Haswell U/Y CPU / Lynx Point LP PCH)",
        PlatformFamily::Haswell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0A04,
        "hsw_u2",
        "Haswell",
        "4th Generation Core Processor (Haswell U/Y CPU / Lynx Point LP PCH)",
        PlatformFamily::Haswell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0A08,
        "hsw_u3",
        "Haswell",
        "4th Generation Core Processor (Haswell U/Y CPU / Lynx Point LP PCH)",
        PlatformFamily::Haswell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0C08,
        "hsw_s",
        "Haswell",
        "Intel Xeon Processor E3-1200 v3 (Haswell CPU, C220 Series PCH)",
        PlatformFamily::Haswell,
    ),
    // Haswell-EP
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x2F00,
        "hsx",
        "Haswell-EP",
        "Server 4th Generation Core Processor (Haswell CPU, C610 Series PCH)",
        PlatformFamily::HaswellServer,
    ),
    // Broadwell (5th generation Core, 9 Series PCH)
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x1600,
        "bdw",
        "Broadwell",
        "Desktop 5th Generation Core Processor (Broadwell CPU / Wildcat Point PCH)",
        PlatformFamily::Broadwell,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x1604,
        "bdw_m",
        "Broadwell",
        "Mobile 5th Generation Core Processor (Broadwell CPU / Wildcat Point PCH)",
        PlatformFamily::Broadwell,
    ),
    // Atom SoCs
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0F00,
        "byt",
        "Bay Trail",
        "Intel Atom E3800/Z3000 Series SoC (Bay Trail)",
        PlatformFamily::BayTrail,
    ),
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x1F00,
        "avn",
        "Avoton",
        "Intel Atom C2000 Series SoC (Avoton/Rangeley)",
        PlatformFamily::Avoton,
    ),
    // Quark
    PlatformDescriptor::new(
        INTEL_VENDOR_ID,
        0x0958,
        "qrk",
        "Quark",
        "Intel Quark SoC X1000 (Galileo)",
        PlatformFamily::Quark,
    ),
];

static CATALOG: Lazy<PlatformCatalog> = Lazy::new(|| {
    PlatformCatalog::from_descriptors(INTEL_PLATFORMS.iter().copied())
        .expect("builtin Intel platform table is internally consistent")
});

/// Catalog built from the builtin Intel platform table
pub fn intel_catalog() -> &'static PlatformCatalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_builds() {
        let catalog = intel_catalog();
        assert_eq!(catalog.len(), INTEL_PLATFORMS.len());
    }

    #[test]
    fn haswell_desktop_is_found_by_ids() {
        let descriptor = intel_catalog().lookup_by_ids(0x8086, 0x0C00).unwrap();
        assert_eq!(descriptor.code, "hsw");
        assert_eq!(descriptor.family, PlatformFamily::Haswell);
    }

    #[test]
    fn codes_resolve_case_insensitively() {
        let lower = intel_catalog().lookup_by_code("byt").unwrap();
        let upper = intel_catalog().lookup_by_code("BYT").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.device_id, 0x0F00);
    }

    #[test]
    fn haswell_ult_rows_stay_distinct() {
        let catalog = intel_catalog();
        let ids = [0x0A00, 0x0A04, 0x0A08];
        for device_id in ids {
            let descriptor = catalog.lookup_by_ids(0x8086, device_id).unwrap();
            assert_eq!(descriptor.name, "Haswell");
            assert_eq!(descriptor.family, PlatformFamily::Haswell);
        }
    }
}
