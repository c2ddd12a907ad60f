//! chipmap-dummy - in-memory hardware double for testing
//!
//! This crate provides a [`HardwareAccess`] implementation that emulates the
//! host bridge's PCI identification in memory. It's useful for testing and
//! development without real hardware: tests pick the PCI identity to present,
//! inject probe or session failures, and assert on session bookkeeping.

use chipmap_core::hardware::{HardwareAccess, HardwareError};

/// Configuration for the dummy hardware
#[derive(Debug, Clone)]
pub struct DummyConfig {
    /// Vendor ID reported for the host bridge at 00:00.0
    pub vendor_id: u16,
    /// Device ID reported for the host bridge at 00:00.0
    pub device_id: u16,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            vendor_id: 0x8086, // Intel
            device_id: 0x0C00, // Haswell desktop
        }
    }
}

/// In-memory hardware access double
///
/// Probes only answer for the host bridge (00:00.0) and only while a session
/// is active, matching how a real driver-backed implementation behaves.
#[derive(Debug)]
pub struct DummyHardware {
    config: DummyConfig,
    session_active: bool,
    start_count: usize,
    stop_count: usize,
    fail_probe: bool,
    fail_session: bool,
}

impl DummyHardware {
    /// Create a dummy with the given configuration
    pub fn new(config: DummyConfig) -> Self {
        Self {
            config,
            session_active: false,
            start_count: 0,
            stop_count: 0,
            fail_probe: false,
            fail_session: false,
        }
    }

    /// Create a dummy with the default configuration (Haswell desktop)
    pub fn new_default() -> Self {
        Self::new(DummyConfig::default())
    }

    /// Create a dummy presenting the given PCI identity
    pub fn with_ids(vendor_id: u16, device_id: u16) -> Self {
        Self::new(DummyConfig {
            vendor_id,
            device_id,
        })
    }

    /// Make every probe fail
    pub fn fail_probe(mut self) -> Self {
        self.fail_probe = true;
        self
    }

    /// Make session start fail
    pub fn fail_session(mut self) -> Self {
        self.fail_session = true;
        self
    }

    /// Returns true while a session is active
    pub fn session_active(&self) -> bool {
        self.session_active
    }

    /// Number of successful session starts
    pub fn start_count(&self) -> usize {
        self.start_count
    }

    /// Number of session stops
    pub fn stop_count(&self) -> usize {
        self.stop_count
    }
}

impl Default for DummyHardware {
    fn default() -> Self {
        Self::new_default()
    }
}

impl HardwareAccess for DummyHardware {
    fn start_session(&mut self) -> Result<(), HardwareError> {
        if self.fail_session {
            return Err(HardwareError::Session("injected session failure"));
        }
        self.start_count += 1;
        self.session_active = true;
        Ok(())
    }

    fn stop_session(&mut self) -> Result<(), HardwareError> {
        self.stop_count += 1;
        self.session_active = false;
        Ok(())
    }

    fn read_pci_vendor_device(
        &mut self,
        bus: u8,
        device: u8,
        function: u8,
    ) -> Result<(u16, u16), HardwareError> {
        if !self.session_active {
            return Err(HardwareError::Session("session not started"));
        }
        if self.fail_probe || (bus, device, function) != (0, 0, 0) {
            return Err(HardwareError::PciRead {
                bus,
                device,
                function,
            });
        }
        Ok((self.config.vendor_id, self.config.device_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_the_configured_identity() {
        let mut hw = DummyHardware::with_ids(0x8086, 0x0150);
        hw.start_session().unwrap();
        assert_eq!(hw.read_pci_vendor_device(0, 0, 0).unwrap(), (0x8086, 0x0150));
    }

    #[test]
    fn probe_without_session_fails() {
        let mut hw = DummyHardware::new_default();
        let err = hw.read_pci_vendor_device(0, 0, 0).unwrap_err();
        assert_eq!(err, HardwareError::Session("session not started"));
    }

    #[test]
    fn only_the_host_bridge_answers() {
        let mut hw = DummyHardware::new_default();
        hw.start_session().unwrap();
        let err = hw.read_pci_vendor_device(0, 31, 0).unwrap_err();
        assert!(matches!(err, HardwareError::PciRead { device: 31, .. }));
    }

    #[test]
    fn session_counters_track_start_and_stop() {
        let mut hw = DummyHardware::new_default();
        hw.start_session().unwrap();
        assert!(hw.session_active());
        hw.stop_session().unwrap();
        assert!(!hw.session_active());
        assert_eq!(hw.start_count(), 1);
        assert_eq!(hw.stop_count(), 1);
    }

    #[test]
    fn injected_failures_surface() {
        let mut hw = DummyHardware::new_default().fail_session();
        assert!(hw.start_session().is_err());

        let mut hw = DummyHardware::new_default().fail_probe();
        hw.start_session().unwrap();
        assert!(hw.read_pci_vendor_device(0, 0, 0).is_err());
    }
}
