//! The chipset handle: this machine, with its resolved register map
//!
//! [`Chipset`] composes the platform catalog, the identification step and
//! the configuration registry into a single handle. Its lifecycle is
//! `Uninitialized → Initialized → Destroyed`: [`Chipset::init`] resolves the
//! platform and caches the effective register map for the session;
//! [`Chipset::destroy`] releases the hardware session. Accessors are only
//! valid while initialized.

use chipmap_core::{ConfigRegistry, HardwareAccess, RegisterDefinition, ResolvedConfig};
use chipmap_platforms::{default_registry, intel_catalog, PlatformCatalog, PlatformDescriptor};

use crate::error::ChipsetError;
use crate::identify::{ChipsetIdentifier, Identification};

/// Options for [`Chipset::init`]
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Resolve this platform code instead of probing (case-insensitive)
    platform_override: Option<String>,
    /// Start the hardware session during init
    start_session: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            platform_override: None,
            start_session: true,
        }
    }
}

impl InitOptions {
    /// Options with default values: probe, start a session
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit platform code instead of probing
    pub fn with_platform(mut self, code: &str) -> Self {
        self.platform_override = Some(code.to_string());
        self
    }

    /// Don't start a hardware session during init
    ///
    /// Useful together with [`with_platform`](Self::with_platform) when no
    /// hardware I/O is wanted at all, e.g. for offline register-map
    /// inspection.
    pub fn without_session(mut self) -> Self {
        self.start_session = false;
        self
    }
}

enum State {
    Uninitialized,
    Initialized(Box<Resolved>),
    Destroyed,
}

struct Resolved {
    ident: Identification,
    config: ResolvedConfig,
}

/// Handle representing the resolved platform and its register map
pub struct Chipset<'t, H: HardwareAccess> {
    hardware: H,
    catalog: &'t PlatformCatalog,
    registry: &'t ConfigRegistry,
    session_active: bool,
    state: State,
}

impl<H: HardwareAccess> Chipset<'static, H> {
    /// Create a handle over the builtin Intel catalog and register tables
    pub fn new(hardware: H) -> Self {
        Self::with_tables(hardware, intel_catalog(), default_registry())
    }
}

impl<'t, H: HardwareAccess> Chipset<'t, H> {
    /// Create a handle over explicit catalog and registry tables
    ///
    /// This is the injection point for embedders with their own tables;
    /// there is no process-wide singleton.
    pub fn with_tables(
        hardware: H,
        catalog: &'t PlatformCatalog,
        registry: &'t ConfigRegistry,
    ) -> Self {
        Self {
            hardware,
            catalog,
            registry,
            session_active: false,
            state: State::Uninitialized,
        }
    }

    /// Resolve the platform and cache its effective register map
    ///
    /// On failure the handle stays `Uninitialized` (a session started during
    /// the failed attempt is stopped) and init may be retried, e.g. with a
    /// platform override.
    pub fn init(&mut self, options: InitOptions) -> Result<(), ChipsetError> {
        match self.state {
            State::Uninitialized => {}
            State::Initialized(_) => return Err(ChipsetError::AlreadyInitialized),
            State::Destroyed => return Err(ChipsetError::NotInitialized),
        }

        if options.start_session {
            self.hardware.start_session()?;
            self.session_active = true;
        }

        let identifier = ChipsetIdentifier::new(self.catalog);
        let ident =
            match identifier.identify(&mut self.hardware, options.platform_override.as_deref()) {
                Ok(ident) => ident,
                Err(err) => {
                    self.release_session();
                    return Err(err);
                }
            };

        let config = self.registry.resolve(ident.descriptor.code);
        log::debug!(
            "resolved {} registers for platform {:?}",
            config.register_count(),
            ident.descriptor.code
        );
        self.state = State::Initialized(Box::new(Resolved { ident, config }));
        Ok(())
    }

    /// Tear the handle down, releasing the hardware session
    ///
    /// Idempotent: a second call is a no-op and the session is stopped at
    /// most once.
    pub fn destroy(&mut self) -> Result<(), ChipsetError> {
        self.state = State::Destroyed;
        if self.session_active {
            self.session_active = false;
            self.hardware.stop_session()?;
        }
        Ok(())
    }

    /// Returns true while the handle is initialized
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, State::Initialized(_))
    }

    /// The full identification outcome
    pub fn identification(&self) -> Result<&Identification, ChipsetError> {
        Ok(&self.resolved()?.ident)
    }

    /// The resolved platform descriptor
    pub fn platform_descriptor(&self) -> Result<&PlatformDescriptor, ChipsetError> {
        Ok(&self.resolved()?.ident.descriptor)
    }

    /// PCI vendor ID used for identification
    pub fn vendor_id(&self) -> Result<u16, ChipsetError> {
        Ok(self.resolved()?.ident.vendor_id)
    }

    /// PCI device ID used for identification
    pub fn device_id(&self) -> Result<u16, ChipsetError> {
        Ok(self.resolved()?.ident.device_id)
    }

    /// Look up a register in the effective map
    pub fn get_register(&self, name: &str) -> Result<&RegisterDefinition, ChipsetError> {
        Ok(self.resolved()?.config.get_register(name)?)
    }

    /// Look up a constant in the effective map
    pub fn get_constant(&self, name: &str) -> Result<u64, ChipsetError> {
        Ok(self.resolved()?.config.get_constant(name)?)
    }

    /// All registers of the effective map, in resolution order
    pub fn registers(
        &self,
    ) -> Result<impl Iterator<Item = &RegisterDefinition>, ChipsetError> {
        Ok(self.resolved()?.config.registers())
    }

    /// The hardware access collaborator, for downstream I/O
    pub fn hardware(&mut self) -> Result<&mut H, ChipsetError> {
        match self.state {
            State::Initialized(_) => Ok(&mut self.hardware),
            _ => Err(ChipsetError::NotInitialized),
        }
    }

    fn resolved(&self) -> Result<&Resolved, ChipsetError> {
        match &self.state {
            State::Initialized(resolved) => Ok(resolved),
            _ => Err(ChipsetError::NotInitialized),
        }
    }

    fn release_session(&mut self) {
        if self.session_active {
            self.session_active = false;
            if let Err(err) = self.hardware.stop_session() {
                log::warn!("could not stop hardware session: {}", err);
            }
        }
    }
}
