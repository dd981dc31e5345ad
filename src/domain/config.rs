// ============================================================================
// Terbilang Configuration
// Prefix and currency unit wrapped around the spelled-out words
// ============================================================================

use crate::words::DEFAULT_CURRENCY_UNIT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for assembling the final output string.
///
/// The output reads `"<prefix> <words> <unit>"`, with absent parts and
/// their separating spaces left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerbilangConfig {
    /// Optional: Text placed before the words (e.g., "Rp", "sebesar")
    pub prefix: Option<String>,

    /// Optional: Currency unit placed after the words (e.g., "rupiah")
    /// None means plain number words
    pub unit: Option<String>,
}

impl TerbilangConfig {
    /// Create an empty configuration (no prefix, no unit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Builder method: Set currency unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Validate the configuration
    ///
    /// Prefix and unit must be non-blank and free of surrounding whitespace,
    /// otherwise the assembled output would carry doubled or dangling spaces.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            validate_affix("Prefix", prefix)?;
        }

        if let Some(unit) = &self.unit {
            validate_affix("Unit", unit)?;
        }

        Ok(())
    }
}

fn validate_affix(label: &str, text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err(format!("{} cannot be empty", label));
    }
    if text.trim() != text {
        return Err(format!(
            "{} cannot have leading or trailing whitespace",
            label
        ));
    }
    Ok(())
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl TerbilangConfig {
    /// Plain number words
    pub fn plain() -> Self {
        Self::new()
    }

    /// Rupiah amounts
    /// - Unit: "rupiah"
    pub fn rupiah() -> Self {
        Self::new().with_unit(DEFAULT_CURRENCY_UNIT)
    }

    /// Rupiah amounts with the "Rp" symbol in front
    /// - Prefix: "Rp"
    /// - Unit: "rupiah"
    pub fn rupiah_with_symbol() -> Self {
        Self::rupiah().with_prefix("Rp")
    }
}
