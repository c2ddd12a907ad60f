//! Hardware access capability consumed by platform identification
//!
//! The configuration core never touches hardware itself; it probes through
//! this trait. Implementations own whatever OS-level handle the probe needs
//! (a driver handle, a raw device file) and acquire/release it via the
//! session calls.

use thiserror::Error;

/// Errors surfaced by a [`HardwareAccess`] implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HardwareError {
    /// The PCI configuration read could not be completed
    #[error("failed to read PCI config at {bus:02x}:{device:02x}.{function:x}")]
    PciRead {
        /// PCI bus number
        bus: u8,
        /// PCI device (slot) number
        device: u8,
        /// PCI function number
        function: u8,
    },

    /// The underlying session could not be started, used or stopped
    #[error("hardware access session error: {0}")]
    Session(&'static str),
}

/// Capability for the low-level probes platform identification needs
///
/// One probe is made per identification attempt; callers wanting retry or
/// backoff loop around the whole initialization, never inside it.
pub trait HardwareAccess {
    /// Acquire the underlying OS-level handle
    fn start_session(&mut self) -> Result<(), HardwareError>;

    /// Release the handle acquired by [`start_session`](Self::start_session)
    fn stop_session(&mut self) -> Result<(), HardwareError>;

    /// Read the (vendor_id, device_id) pair from PCI configuration space
    fn read_pci_vendor_device(
        &mut self,
        bus: u8,
        device: u8,
        function: u8,
    ) -> Result<(u16, u16), HardwareError>;
}

impl<T: HardwareAccess + ?Sized> HardwareAccess for &mut T {
    fn start_session(&mut self) -> Result<(), HardwareError> {
        (**self).start_session()
    }

    fn stop_session(&mut self) -> Result<(), HardwareError> {
        (**self).stop_session()
    }

    fn read_pci_vendor_device(
        &mut self,
        bus: u8,
        device: u8,
        function: u8,
    ) -> Result<(u16, u16), HardwareError> {
        (**self).read_pci_vendor_device(bus, device, function)
    }
}
