//! Layered configuration registry and the resolved per-platform view
//!
//! The registry composes one common [`ConfigLayer`] with any number of
//! per-platform layers. Resolution overlays a platform's layer on the common
//! baseline by whole-register replacement: a platform definition of a name
//! fully replaces the common one, never merging field lists. This mirrors
//! how per-platform configuration modules shadow common definitions, and it
//! is the contract downstream register semantics depend on.

use crate::error::ConfigError;
use crate::layer::{ConfigLayer, Scope};
use crate::register::RegisterDefinition;

/// Common baseline plus per-platform override layers
///
/// Built once during startup, then only queried. Layers are frozen as they
/// are registered.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    common: Option<ConfigLayer>,
    platforms: Vec<ConfigLayer>,
}

impl ConfigRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the common baseline layer; allowed exactly once
    pub fn register_common_layer(&mut self, mut layer: ConfigLayer) -> Result<(), ConfigError> {
        if !layer.scope().is_common() {
            return Err(ConfigError::ScopeMismatch {
                expected: Scope::Common,
                found: layer.scope().clone(),
            });
        }
        if self.common.is_some() {
            return Err(ConfigError::AlreadyConfigured);
        }
        layer.freeze();
        self.common = Some(layer);
        Ok(())
    }

    /// Register a platform's override layer under its code (case-insensitive)
    pub fn register_platform_layer(
        &mut self,
        code: &str,
        mut layer: ConfigLayer,
    ) -> Result<(), ConfigError> {
        let code = code.to_ascii_lowercase();
        match layer.scope() {
            Scope::Platform(layer_code) if *layer_code == code => {}
            other => {
                return Err(ConfigError::ScopeMismatch {
                    expected: Scope::Platform(code),
                    found: other.clone(),
                });
            }
        }
        if self.platform_layer(&code).is_some() {
            return Err(ConfigError::DuplicatePlatformLayer { code });
        }
        layer.freeze();
        self.platforms.push(layer);
        Ok(())
    }

    /// Returns true if a layer is registered for the code (case-insensitive)
    pub fn has_platform_layer(&self, code: &str) -> bool {
        self.platform_layer(&code.to_ascii_lowercase()).is_some()
    }

    /// Resolve the effective configuration for a platform code
    ///
    /// Starts from the common layer, then replaces or inserts every entry of
    /// the platform's layer by name. Order: common insertion order for names
    /// the platform did not override, then platform-only additions in the
    /// platform layer's insertion order. A code with no registered layer
    /// resolves to the common view unchanged; this never fails.
    pub fn resolve(&self, platform_code: &str) -> ResolvedConfig {
        let code = platform_code.to_ascii_lowercase();

        let mut registers: Vec<RegisterDefinition> = Vec::new();
        let mut constants: Vec<(String, u64)> = Vec::new();
        if let Some(common) = &self.common {
            registers.extend(common.registers().cloned());
            constants.extend(common.constants().map(|(n, v)| (n.to_string(), v)));
        }

        if let Some(layer) = self.platform_layer(&code) {
            for definition in layer.registers() {
                match registers.iter_mut().find(|r| r.name() == definition.name()) {
                    Some(slot) => *slot = definition.clone(),
                    None => registers.push(definition.clone()),
                }
            }
            for (name, value) in layer.constants() {
                match constants.iter_mut().find(|(n, _)| n == name) {
                    Some(slot) => slot.1 = value,
                    None => constants.push((name.to_string(), value)),
                }
            }
        }

        ResolvedConfig {
            platform_code: code,
            registers,
            constants,
        }
    }

    fn platform_layer(&self, code: &str) -> Option<&ConfigLayer> {
        self.platforms
            .iter()
            .find(|l| matches!(l.scope(), Scope::Platform(c) if c == code))
    }
}

/// Effective register map and constants for one resolved platform
///
/// Snapshot taken by [`ConfigRegistry::resolve`]; immutable, safe to cache
/// for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    platform_code: String,
    registers: Vec<RegisterDefinition>,
    constants: Vec<(String, u64)>,
}

impl ResolvedConfig {
    /// The (lowercase) platform code this view was resolved for
    pub fn platform_code(&self) -> &str {
        &self.platform_code
    }

    /// Look up a register by name
    pub fn get_register(&self, name: &str) -> Result<&RegisterDefinition, ConfigError> {
        self.registers
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_string(),
            })
    }

    /// Look up a constant by name
    pub fn get_constant(&self, name: &str) -> Result<u64, ConfigError> {
        self.constants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_string(),
            })
    }

    /// Registers in resolution order
    pub fn registers(&self) -> impl Iterator<Item = &RegisterDefinition> {
        self.registers.iter()
    }

    /// Constants in resolution order
    pub fn constants(&self) -> impl Iterator<Item = (&str, u64)> {
        self.constants.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Number of registers in the effective map
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{RegisterField, RegisterLocation};

    const LPC_BIOS_CNTL: RegisterLocation = RegisterLocation::Pci {
        bus: 0,
        device: 31,
        function: 0,
        offset: 0xDC,
    };

    fn bios_control_common() -> RegisterDefinition {
        RegisterDefinition::new(
            "BIOS_CONTROL",
            LPC_BIOS_CNTL,
            32,
            vec![RegisterField::new("BIOSWE", 0, 1, "BIOS Write Enable").unwrap()],
        )
        .unwrap()
    }

    fn bios_control_hsw() -> RegisterDefinition {
        RegisterDefinition::new(
            "BIOS_CONTROL",
            LPC_BIOS_CNTL,
            32,
            vec![
                RegisterField::new("BIOSWE", 0, 1, "BIOS Write Enable").unwrap(),
                RegisterField::new("SMM_BWP", 5, 1, "SMM BIOS Write Protect").unwrap(),
            ],
        )
        .unwrap()
    }

    fn tco_timer() -> RegisterDefinition {
        RegisterDefinition::new("TCO_TMR", RegisterLocation::Mmio { offset: 0x60 }, 16, vec![])
            .unwrap()
    }

    fn registry_with_hsw() -> ConfigRegistry {
        let mut common = ConfigLayer::common();
        common.add_register(bios_control_common()).unwrap();
        common.add_register(tco_timer()).unwrap();
        common.add_constant("SPIBAR_OFFSET", 0x3800).unwrap();

        let mut hsw = ConfigLayer::for_platform("hsw");
        hsw.add_register(bios_control_hsw()).unwrap();
        hsw.add_register(
            RegisterDefinition::new("PR0", RegisterLocation::Mmio { offset: 0x74 }, 32, vec![])
                .unwrap(),
        )
        .unwrap();
        hsw.add_constant("SPIBAR_OFFSET", 0x3000).unwrap();
        hsw.add_constant("FREG_COUNT", 5).unwrap();

        let mut registry = ConfigRegistry::new();
        registry.register_common_layer(common).unwrap();
        registry.register_platform_layer("hsw", hsw).unwrap();
        registry
    }

    #[test]
    fn platform_definition_fully_replaces_common() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("hsw");
        let reg = resolved.get_register("BIOS_CONTROL").unwrap();
        // the override wins whole, never a field union with the baseline
        assert_eq!(*reg, bios_control_hsw());
        let names: Vec<_> = reg.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["BIOSWE", "SMM_BWP"]);
    }

    #[test]
    fn unoverridden_registers_pass_through_unchanged() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("hsw");
        assert_eq!(*resolved.get_register("TCO_TMR").unwrap(), tco_timer());
    }

    #[test]
    fn unknown_code_falls_back_to_common() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("nonexistent-code");
        assert_eq!(resolved.register_count(), 2);
        assert_eq!(*resolved.get_register("BIOS_CONTROL").unwrap(), bios_control_common());
        assert!(resolved.get_register("PR0").is_err());
        assert_eq!(resolved.get_constant("SPIBAR_OFFSET").unwrap(), 0x3800);
    }

    #[test]
    fn resolution_order_is_common_then_platform_additions() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("hsw");
        let names: Vec<_> = resolved.registers().map(|r| r.name().to_string()).collect();
        assert_eq!(names, ["BIOS_CONTROL", "TCO_TMR", "PR0"]);
    }

    #[test]
    fn constants_use_the_same_overlay() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("hsw");
        assert_eq!(resolved.get_constant("SPIBAR_OFFSET").unwrap(), 0x3000);
        assert_eq!(resolved.get_constant("FREG_COUNT").unwrap(), 5);
        assert!(resolved.get_constant("NO_SUCH").is_err());
    }

    #[test]
    fn platform_codes_are_case_insensitive() {
        let registry = registry_with_hsw();
        let resolved = registry.resolve("HSW");
        assert!(resolved.get_register("PR0").is_ok());
        assert_eq!(resolved.platform_code(), "hsw");
    }

    #[test]
    fn second_common_layer_is_rejected() {
        let mut registry = ConfigRegistry::new();
        registry.register_common_layer(ConfigLayer::common()).unwrap();
        let err = registry
            .register_common_layer(ConfigLayer::common())
            .unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyConfigured));
    }

    #[test]
    fn duplicate_platform_layer_is_rejected() {
        let mut registry = ConfigRegistry::new();
        registry
            .register_platform_layer("hsw", ConfigLayer::for_platform("hsw"))
            .unwrap();
        let err = registry
            .register_platform_layer("HSW", ConfigLayer::for_platform("hsw"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePlatformLayer { code } if code == "hsw"));
    }

    #[test]
    fn scope_mismatch_is_rejected() {
        let mut registry = ConfigRegistry::new();
        let err = registry
            .register_common_layer(ConfigLayer::for_platform("hsw"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ScopeMismatch { .. }));

        let err = registry
            .register_platform_layer("hsw", ConfigLayer::for_platform("byt"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ScopeMismatch { .. }));
    }

    #[test]
    fn registered_layers_are_frozen() {
        let mut registry = ConfigRegistry::new();
        let layer = ConfigLayer::for_platform("byt");
        assert!(!layer.is_frozen());
        registry.register_platform_layer("byt", layer).unwrap();
        assert!(registry.has_platform_layer("BYT"));
    }
}
