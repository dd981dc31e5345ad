// ============================================================================
// Vocabulary
// Fixed Indonesian lexicon for digits, teens, tens and magnitude groups
// ============================================================================

/// Output returned in place of words when input cannot be parsed.
pub const INVALID_SENTINEL: &str = "tidak valid";

/// Default currency unit appended by the rupiah entry points.
pub const DEFAULT_CURRENCY_UNIT: &str = "rupiah";

/// Digit names, indexed by digit value.
pub const DIGITS: [&str; 10] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

pub const TEN: &str = "sepuluh";
pub const ELEVEN: &str = "sebelas";

/// Follows a digit name for 12-19 ("dua belas")
pub const TEEN: &str = "belas";

/// Follows the tens digit for 20-99 ("dua puluh")
pub const TENS: &str = "puluh";

pub const MINUS: &str = "minus";

/// Connector between integer words and fraction digits
pub const DECIMAL_POINT: &str = "koma";

/// A magnitude group tested during decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude {
    /// Smallest value that falls in this group
    pub threshold: u64,
    /// Group name following a spelled quotient ("dua ribu")
    pub name: &'static str,
    /// Fused form used when the quotient is exactly one ("seribu")
    pub single: Option<&'static str>,
}

/// Magnitude groups, largest first. The first threshold not exceeding the
/// value wins.
pub const MAGNITUDES: [Magnitude; 5] = [
    Magnitude {
        threshold: 1_000_000_000_000,
        name: "triliun",
        single: None,
    },
    Magnitude {
        threshold: 1_000_000_000,
        name: "miliar",
        single: None,
    },
    Magnitude {
        threshold: 1_000_000,
        name: "juta",
        single: None,
    },
    Magnitude {
        threshold: 1_000,
        name: "ribu",
        single: Some("seribu"),
    },
    Magnitude {
        threshold: 100,
        name: "ratus",
        single: Some("seratus"),
    },
];
