//! End-to-end tests for the chipset handle against the dummy hardware

use chipmap::{Chipset, ChipsetError, InitOptions, RegisterLocation, UnknownPlatform};
use chipmap_dummy::DummyHardware;

#[test]
fn probe_init_accessors_destroy() {
    let mut chipset = Chipset::new(DummyHardware::with_ids(0x8086, 0x0150));
    chipset.init(InitOptions::new()).unwrap();

    let descriptor = *chipset.platform_descriptor().unwrap();
    assert_eq!(descriptor.code, "ivb");
    assert_eq!(descriptor.name, "Ivy Bridge");
    assert_eq!((chipset.vendor_id().unwrap(), chipset.device_id().unwrap()), (0x8086, 0x0150));

    // Ivy Bridge redefines BIOS_CNTL wholesale; baseline registers remain
    let bios_cntl = chipset.get_register("BIOS_CNTL").unwrap();
    assert!(bios_cntl.field("SMM_BWP").is_some());
    assert!(chipset.get_register("HSFS").is_ok());
    assert!(matches!(
        chipset.get_register("NO_SUCH_REG").unwrap_err(),
        ChipsetError::Config(_)
    ));

    chipset.destroy().unwrap();
    assert!(matches!(
        chipset.get_register("BIOS_CNTL").unwrap_err(),
        ChipsetError::NotInitialized
    ));
}

#[test]
fn session_is_started_and_stopped_exactly_once() {
    let mut hw = DummyHardware::new_default();
    let mut chipset = Chipset::new(&mut hw);
    chipset.init(InitOptions::new()).unwrap();
    chipset.destroy().unwrap();
    chipset.destroy().unwrap();
    drop(chipset);
    assert_eq!(hw.start_count(), 1);
    assert_eq!(hw.stop_count(), 1);
    assert!(!hw.session_active());
}

#[test]
fn failed_identification_stops_the_session_it_started() {
    let mut hw = DummyHardware::with_ids(0x10DE, 0x1234);
    let mut chipset = Chipset::new(&mut hw);
    let err = chipset.init(InitOptions::new()).unwrap_err();
    assert!(matches!(err, ChipsetError::UnsupportedVendor { vendor_id: 0x10DE, .. }));
    drop(chipset);
    assert_eq!(hw.start_count(), 1);
    assert_eq!(hw.stop_count(), 1);
}

#[test]
fn uppercase_override_matches_lowercase() {
    let mut upper = Chipset::new(DummyHardware::new_default());
    upper
        .init(InitOptions::new().with_platform("HSW").without_session())
        .unwrap();
    let mut lower = Chipset::new(DummyHardware::new_default());
    lower
        .init(InitOptions::new().with_platform("hsw").without_session())
        .unwrap();
    assert_eq!(
        upper.platform_descriptor().unwrap(),
        lower.platform_descriptor().unwrap()
    );
}

#[test]
fn platform_without_layer_gets_the_baseline() {
    let mut chipset = Chipset::new(DummyHardware::with_ids(0x8086, 0x3C00));
    chipset.init(InitOptions::new()).unwrap();
    assert_eq!(chipset.platform_descriptor().unwrap().code, "jkt");
    let bios_cntl = chipset.get_register("BIOS_CNTL").unwrap();
    assert!(bios_cntl.field("SMM_BWP").is_none());
    assert_eq!(chipset.get_constant("SPIBAR_OFFSET").unwrap(), 0x3800);
}

#[test]
fn bay_trail_register_map_differs_from_pch_platforms() {
    let mut chipset = Chipset::new(DummyHardware::with_ids(0x8086, 0x0F00));
    chipset.init(InitOptions::new()).unwrap();
    let bios_cntl = chipset.get_register("BIOS_CNTL").unwrap();
    assert_eq!(bios_cntl.location(), RegisterLocation::Mmio { offset: 0xFC });
    assert!(chipset.get_register("SBASE").is_ok());
}

#[test]
fn unknown_override_reports_the_code() {
    let mut chipset = Chipset::new(DummyHardware::new_default());
    let err = chipset
        .init(InitOptions::new().with_platform("nope"))
        .unwrap_err();
    assert_eq!(
        err,
        ChipsetError::UnknownPlatform(UnknownPlatform::Code { code: "nope".into() })
    );
    assert!(!chipset.is_initialized());
}

#[test]
fn failed_session_start_surfaces() {
    let mut chipset = Chipset::new(DummyHardware::new_default().fail_session());
    let err = chipset.init(InitOptions::new()).unwrap_err();
    assert!(matches!(err, ChipsetError::Hardware(_)));
    assert!(!chipset.is_initialized());
}

#[test]
fn supported_platform_listing_is_enumerable() {
    let catalog = chipmap::intel_catalog();
    assert!(catalog.len() >= 10);
    // every row round-trips through both lookups
    for descriptor in catalog.descriptors() {
        assert_eq!(
            catalog
                .lookup_by_ids(descriptor.vendor_id, descriptor.device_id)
                .unwrap()
                .code,
            descriptor.code
        );
        assert_eq!(
            catalog.lookup_by_code(descriptor.code).unwrap().device_id,
            descriptor.device_id
        );
    }
}
