//! Register definitions: named, bit-exact descriptions of hardware registers
//!
//! A [`RegisterDefinition`] records where a register lives (PCI configuration
//! space or an MMIO region), how wide it is, and the named bit fields inside
//! it. Definitions are validated when constructed and immutable afterwards:
//! a wrong bit layout here makes every downstream consumer misread the
//! hardware, so violations fail loudly at build time.

use std::fmt;

use crate::error::ConfigError;

/// One named bit-range within a register
///
/// `bit_offset` is 0-based from the LSB; `bit_width` is at least 1. Whether
/// the field actually fits its register is checked when the owning
/// [`RegisterDefinition`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterField {
    name: String,
    bit_offset: u32,
    bit_width: u32,
    description: String,
}

impl RegisterField {
    /// Create a new field
    pub fn new(
        name: impl Into<String>,
        bit_offset: u32,
        bit_width: u32,
        description: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if bit_width == 0 {
            return Err(ConfigError::InvalidField {
                field: name,
                reason: "field width must be at least one bit".into(),
            });
        }
        if bit_offset.saturating_add(bit_width) > 64 {
            return Err(ConfigError::InvalidField {
                field: name,
                reason: format!(
                    "bits {}..{} extend past bit 63",
                    bit_offset,
                    bit_offset + bit_width
                ),
            });
        }
        Ok(Self {
            name,
            bit_offset,
            bit_width,
            description: description.into(),
        })
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bit position of the field's LSB
    pub fn bit_offset(&self) -> u32 {
        self.bit_offset
    }

    /// Width of the field in bits
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Human-readable description (may be empty)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Mask of the field, positioned within the register
    pub fn mask(&self) -> u64 {
        if self.bit_width == 64 {
            u64::MAX
        } else {
            ((1u64 << self.bit_width) - 1) << self.bit_offset
        }
    }

    /// Extract the field value from a raw register value
    pub fn extract(&self, raw: u64) -> u64 {
        (raw & self.mask()) >> self.bit_offset
    }

    /// One past the field's highest bit
    fn bit_end(&self) -> u32 {
        self.bit_offset + self.bit_width
    }

    /// Check whether two fields share any bit
    fn overlaps(&self, other: &Self) -> bool {
        self.bit_offset < other.bit_end() && other.bit_offset < self.bit_end()
    }
}

/// Where a register is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterLocation {
    /// PCI configuration space register at (bus, device, function) + offset
    Pci {
        /// PCI bus number
        bus: u8,
        /// PCI device (slot) number
        device: u8,
        /// PCI function number
        function: u8,
        /// Offset within the function's configuration space
        offset: u16,
    },
    /// Register at an offset within a platform MMIO region (e.g. SPIBAR)
    Mmio {
        /// Offset from the region base
        offset: u64,
    },
}

impl fmt::Display for RegisterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pci {
                bus,
                device,
                function,
                offset,
            } => write!(f, "{:02x}:{:02x}.{:x} +{:#x}", bus, device, function, offset),
            Self::Mmio { offset } => write!(f, "mmio +{:#x}", offset),
        }
    }
}

/// A named register: location, access width and ordered bit fields
///
/// Field order is insertion order; field names are unique within the
/// register and no two fields overlap. Equality is by value, which makes
/// whole-register replacement in layered configuration directly testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDefinition {
    name: String,
    location: RegisterLocation,
    width_bits: u32,
    fields: Vec<RegisterField>,
}

impl RegisterDefinition {
    /// Create a new register definition, validating the field layout
    pub fn new(
        name: impl Into<String>,
        location: RegisterLocation,
        width_bits: u32,
        fields: Vec<RegisterField>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        if !matches!(width_bits, 8 | 16 | 32 | 64) {
            return Err(ConfigError::InvalidRegister {
                register: name,
                reason: format!("width must be 8, 16, 32 or 64 bits, not {}", width_bits),
            });
        }
        for (i, field) in fields.iter().enumerate() {
            if field.bit_end() > width_bits {
                return Err(ConfigError::InvalidRegister {
                    register: name,
                    reason: format!(
                        "field {:?} (bits {}..{}) exceeds the {}-bit register width",
                        field.name(),
                        field.bit_offset(),
                        field.bit_end(),
                        width_bits
                    ),
                });
            }
            for earlier in &fields[..i] {
                if earlier.name() == field.name() {
                    return Err(ConfigError::InvalidRegister {
                        register: name,
                        reason: format!("duplicate field name {:?}", field.name()),
                    });
                }
                if earlier.overlaps(field) {
                    return Err(ConfigError::InvalidRegister {
                        register: name,
                        reason: format!(
                            "fields {:?} and {:?} overlap",
                            earlier.name(),
                            field.name()
                        ),
                    });
                }
            }
        }
        Ok(Self {
            name,
            location,
            width_bits,
            fields,
        })
    }

    /// Register name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the register is addressed
    pub fn location(&self) -> RegisterLocation {
        self.location
    }

    /// Access width in bits (8, 16, 32 or 64)
    pub fn width_bits(&self) -> u32 {
        self.width_bits
    }

    /// Fields in insertion order
    pub fn fields(&self) -> &[RegisterField] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&RegisterField> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for RegisterDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-bit @ {})",
            self.name, self.width_bits, self.location
        )
    }
}
