// ============================================================================
// Terbilang Formatter
// Assembles prefix, spelled-out words and currency unit into one string
// ============================================================================

use crate::domain::TerbilangConfig;
use crate::numeric::{parse_numeric, NumericResult, NumericValue};
use crate::words::{words, INVALID_SENTINEL};

/// Formatter applying a validated [`TerbilangConfig`] to converted values.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terbilang {
    config: TerbilangConfig,
}

impl Terbilang {
    /// Formatter producing plain number words
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter appending "rupiah"
    pub fn rupiah() -> Self {
        Self {
            config: TerbilangConfig::rupiah(),
        }
    }

    /// Wrap a configuration that has already passed validation
    pub(crate) fn from_validated(config: TerbilangConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TerbilangConfig {
        &self.config
    }

    /// Spell out a value with this formatter's prefix and unit
    pub fn format(&self, value: &NumericValue) -> String {
        self.assemble(&words(value).to_string())
    }

    /// Spell out a conversion result; failures render as the sentinel,
    /// still wrapped in prefix and unit
    pub fn format_result(&self, value: NumericResult<NumericValue>) -> String {
        self.assemble(&spell_or_sentinel(value))
    }

    /// Normalize, parse and spell out a numeric string
    pub fn format_str(&self, raw: &str) -> String {
        self.format_result(parse_numeric(raw))
    }

    fn assemble(&self, core: &str) -> String {
        compose(core, self.config.prefix.as_deref(), self.config.unit.as_deref())
    }
}

/// Spoken words for a conversion result, or the sentinel on failure.
pub fn spell_or_sentinel(value: NumericResult<NumericValue>) -> String {
    match value {
        Ok(value) => words(&value).to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "conversion failed, returning sentinel");
            INVALID_SENTINEL.to_string()
        },
    }
}

/// Join prefix, core words and unit with single spaces.
///
/// Empty prefix or unit is treated as absent.
pub(crate) fn compose(core: &str, prefix: Option<&str>, unit: Option<&str>) -> String {
    let prefix = prefix.filter(|p| !p.is_empty());
    let unit = unit.filter(|u| !u.is_empty());

    let capacity = core.len()
        + prefix.map_or(0, |p| p.len() + 1)
        + unit.map_or(0, |u| u.len() + 1);
    let mut out = String::with_capacity(capacity);

    if let Some(prefix) = prefix {
        out.push_str(prefix);
        out.push(' ');
    }
    out.push_str(core);
    if let Some(unit) = unit {
        out.push(' ');
        out.push_str(unit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    #[test]
    fn test_compose() {
        assert_eq!(compose("seribu", None, None), "seribu");
        assert_eq!(compose("seribu", Some("Rp"), None), "Rp seribu");
        assert_eq!(compose("seribu", None, Some("rupiah")), "seribu rupiah");
        assert_eq!(
            compose("seribu", Some("Rp"), Some("rupiah")),
            "Rp seribu rupiah"
        );
        assert_eq!(compose("seribu", Some(""), Some("")), "seribu");
    }

    #[test]
    fn test_plain_formatter() {
        let formatter = Terbilang::new();
        assert_eq!(formatter.format(&NumericValue::Integer(15000)), "lima belas ribu");
        assert_eq!(formatter.format_str("2.500.000"), "dua juta lima ratus ribu");
        assert_eq!(formatter.format_str("abc"), "tidak valid");
    }

    #[test]
    fn test_rupiah_formatter() {
        let formatter = Terbilang::rupiah();
        assert_eq!(formatter.format(&NumericValue::Integer(10000)), "sepuluh ribu rupiah");
        assert_eq!(formatter.format_str("12a3"), "tidak valid rupiah");
    }

    #[test]
    fn test_format_result_sentinel() {
        let formatter = Terbilang::from_validated(
            TerbilangConfig::new().with_prefix("sekitar").with_unit("IDR"),
        );
        assert_eq!(
            formatter.format_result(Err(NumericError::Overflow)),
            "sekitar tidak valid IDR"
        );
        assert_eq!(
            formatter.format_result(Ok(NumericValue::Integer(5000))),
            "sekitar lima ribu IDR"
        );
    }
}
