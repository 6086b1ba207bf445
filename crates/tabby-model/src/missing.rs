//! Missing-value sentinels.
//!
//! Cells are always text. Three literal values stand for "no data" and are
//! treated as equivalent by classification and imputation.

/// Literal cell values that denote a missing value.
pub const MISSING_SENTINELS: [&str; 3] = ["", "None", "NaN"];

/// Check whether a cell holds one of the missing sentinels.
///
/// Matching is exact: `" "`, `"nan"` and `"none"` are regular values.
pub fn is_missing(value: &str) -> bool {
    MISSING_SENTINELS.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_missing() {
        assert!(is_missing(""));
        assert!(is_missing("None"));
        assert!(is_missing("NaN"));
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(!is_missing(" "));
        assert!(!is_missing("nan"));
        assert!(!is_missing("none"));
        assert!(!is_missing("NULL"));
        assert!(!is_missing("0"));
    }
}
