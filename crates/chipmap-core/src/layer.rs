//! Configuration layers: one scope's registers and symbolic constants
//!
//! A [`ConfigLayer`] holds either the common baseline shared by every
//! platform or the overrides of a single platform. Layers are built once at
//! startup from static definitions and frozen; the registry refuses any
//! mutation afterwards.

use std::fmt;

use crate::error::ConfigError;
use crate::register::RegisterDefinition;

/// Who a layer applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Baseline shared by every platform
    Common,
    /// Overrides for one platform, identified by its lowercase code
    Platform(String),
}

impl Scope {
    /// Scope for a platform code (normalized to lowercase)
    pub fn platform(code: &str) -> Self {
        Self::Platform(code.to_ascii_lowercase())
    }

    /// Returns true for the common scope
    pub fn is_common(&self) -> bool {
        matches!(self, Self::Common)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Platform(code) => write!(f, "{}", code),
        }
    }
}

/// One scope's register and constant definitions
#[derive(Debug, Clone)]
pub struct ConfigLayer {
    scope: Scope,
    registers: Vec<RegisterDefinition>,
    constants: Vec<(String, u64)>,
    frozen: bool,
}

impl ConfigLayer {
    /// Create an empty layer for the given scope
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            registers: Vec::new(),
            constants: Vec::new(),
            frozen: false,
        }
    }

    /// Create an empty common layer
    pub fn common() -> Self {
        Self::new(Scope::Common)
    }

    /// Create an empty layer for a platform code (case-insensitive)
    pub fn for_platform(code: &str) -> Self {
        Self::new(Scope::platform(code))
    }

    /// The layer's scope
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Add a register definition
    pub fn add_register(&mut self, definition: RegisterDefinition) -> Result<(), ConfigError> {
        self.check_mutable()?;
        if self.registers.iter().any(|r| r.name() == definition.name()) {
            return Err(ConfigError::DuplicateRegister {
                scope: self.scope.clone(),
                register: definition.name().to_string(),
            });
        }
        self.registers.push(definition);
        Ok(())
    }

    /// Add a symbolic constant (base address, mask, bus number, ...)
    pub fn add_constant(&mut self, name: impl Into<String>, value: u64) -> Result<(), ConfigError> {
        self.check_mutable()?;
        let name = name.into();
        if self.constants.iter().any(|(n, _)| *n == name) {
            return Err(ConfigError::DuplicateConstant {
                scope: self.scope.clone(),
                constant: name,
            });
        }
        self.constants.push((name, value));
        Ok(())
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

    /// Registers in insertion order
    pub fn registers(&self) -> impl Iterator<Item = &RegisterDefinition> {
        self.registers.iter()
    }

    /// Constants in insertion order
    pub fn constants(&self) -> impl Iterator<Item = (&str, u64)> {
        self.constants.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Number of registers in this layer
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    /// Make the layer read-only; one-way
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Returns true once [`freeze`](Self::freeze) has been called
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn check_mutable(&self) -> Result<(), ConfigError> {
        if self.frozen {
            return Err(ConfigError::FrozenLayer {
                scope: self.scope.clone(),
            });
        }
        Ok(())
    }
}
