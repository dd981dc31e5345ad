// ============================================================================
// Formatter Factory
// Creates formatters from validated configuration
// ============================================================================

use crate::domain::TerbilangConfig;
use crate::engine::Terbilang;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a formatter from configuration
///
/// # Arguments
/// * `config` - Prefix and currency unit configuration
///
/// # Returns
/// * `Result<Terbilang, String>` - Configured formatter or validation error
///
/// # Example
/// ```
/// use angka_terbilang::prelude::*;
///
/// let config = TerbilangConfig::rupiah().with_prefix("Rp");
/// let formatter = create_from_config(config).unwrap();
/// assert_eq!(formatter.format_str("15000"), "Rp lima belas ribu rupiah");
/// ```
pub fn create_from_config(config: TerbilangConfig) -> Result<Terbilang, String> {
    config.validate()?;

    tracing::debug!(
        prefix = ?config.prefix,
        unit = ?config.unit,
        "created terbilang formatter"
    );

    Ok(Terbilang::from_validated(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating formatters with fluent API
///
/// # Example
/// ```
/// use angka_terbilang::engine::TerbilangBuilder;
///
/// let formatter = TerbilangBuilder::new()
///     .prefix("sebesar")
///     .rupiah()
///     .build()
///     .unwrap();
///
/// assert_eq!(formatter.format_str("1.000,5"), "sebesar seribu koma lima rupiah");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TerbilangBuilder {
    config: TerbilangConfig,
}

impl TerbilangBuilder {
    /// Create a builder for plain number words
    pub fn new() -> Self {
        Self::default()
    }

    /// Set text placed before the words
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = Some(prefix.into());
        self
    }

    /// Set currency unit placed after the words
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.config.unit = Some(unit.into());
        self
    }

    /// Use the default "rupiah" unit
    pub fn rupiah(self) -> Self {
        self.unit(crate::words::DEFAULT_CURRENCY_UNIT)
    }

    /// Drop any currency unit
    pub fn no_unit(mut self) -> Self {
        self.config.unit = None;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the formatter
    pub fn build(self) -> Result<Terbilang, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &TerbilangConfig {
        &self.config
    }
}
