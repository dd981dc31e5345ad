// ============================================================================
// Logging Bootstrap
// Optional fmt subscriber for binaries and demos
// ============================================================================
//
// The library itself only emits `tracing` events (debug/trace level) and
// never installs a subscriber. Applications that want to see them either
// install their own subscriber or enable the `logging` feature and call
// `init_logging` once at startup.
//
// # Usage
//
// ```ignore
// use angka_terbilang::utils::init_logging;
//
// init_logging(tracing::Level::DEBUG);
// ```
// ============================================================================

/// Install a global fmt subscriber at the given maximum level.
///
/// # Returns
/// * `true` if the subscriber was installed
/// * `false` if a global subscriber was already set
#[cfg(feature = "logging")]
pub fn init_logging(level: tracing::Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a global fmt subscriber at the given maximum level.
///
/// **Note:** This is a no-op stub. Enable the `logging` feature for output.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: tracing::Level) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "logging")]
    #[test]
    fn test_init_logging_once() {
        init_logging(tracing::Level::TRACE);
        // A second global subscriber is always refused
        assert!(!init_logging(tracing::Level::TRACE));
    }

    #[cfg(not(feature = "logging"))]
    #[test]
    fn test_init_logging_stub() {
        assert!(!init_logging(tracing::Level::DEBUG));
    }
}
