//! Process-wide switch for logging cell values.
//!
//! Cell contents may be sensitive, so every crate routes values through
//! [`redact_value`] before handing them to `tracing`. The CLI flips the
//! switch once at startup when `--log-data` is given.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when cell values may not be logged.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Allow or forbid cell values in log output.
pub fn set_log_data_enabled(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if cell values may be logged.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Returns the value when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_defaults_on() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("ssn-123-45"), REDACTED_VALUE);
    }
}
