//! Error types for the register and configuration model

use thiserror::Error;

use crate::layer::Scope;

/// Errors from building or querying register configuration
///
/// The build-time variants (everything except `NotFound`) indicate a
/// programming error in the static tables. They are surfaced to the caller
/// immediately; a half-built configuration is never used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field definition rejected at construction time
    #[error("invalid field {field:?}: {reason}")]
    InvalidField {
        /// Field name
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// Register definition rejected at construction time
    #[error("invalid register {register:?}: {reason}")]
    InvalidRegister {
        /// Register name
        register: String,
        /// What was wrong with it
        reason: String,
    },

    /// Register name already present in the layer
    #[error("register {register:?} is already defined in the {scope} layer")]
    DuplicateRegister {
        /// Scope of the layer that rejected the definition
        scope: Scope,
        /// Register name
        register: String,
    },

    /// Constant name already present in the layer
    #[error("constant {constant:?} is already defined in the {scope} layer")]
    DuplicateConstant {
        /// Scope of the layer that rejected the definition
        scope: Scope,
        /// Constant name
        constant: String,
    },

    /// Mutation attempted after the layer was frozen
    #[error("the {scope} layer is frozen")]
    FrozenLayer {
        /// Scope of the frozen layer
        scope: Scope,
    },

    /// A common layer was already registered
    #[error("a common layer is already registered")]
    AlreadyConfigured,

    /// A layer for this platform code was already registered
    #[error("a layer for platform {code:?} is already registered")]
    DuplicatePlatformLayer {
        /// Platform code (lowercase)
        code: String,
    },

    /// Layer registered under a slot that contradicts its own scope
    #[error("layer scope mismatch: expected {expected}, found {found}")]
    ScopeMismatch {
        /// Scope the registry expected
        expected: Scope,
        /// Scope the layer carries
        found: Scope,
    },

    /// Lookup for a name that was never defined
    #[error("no register or constant named {name:?}")]
    NotFound {
        /// The name that was looked up
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ConfigError::DuplicateRegister {
            scope: Scope::platform("hsw"),
            register: "BIOS_CNTL".into(),
        };
        assert_eq!(
            err.to_string(),
            "register \"BIOS_CNTL\" is already defined in the hsw layer"
        );

        let err = ConfigError::NotFound {
            name: "NO_SUCH_REG".into(),
        };
        assert!(err.to_string().contains("NO_SUCH_REG"));
    }
}
