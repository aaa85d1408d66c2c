//! Aggregation options.
//!
//! Deserializable from an embedding application's TOML config; every
//! field defaults to false, matching the strictest filter.

use serde::{Deserialize, Serialize};

/// What to include when aggregating review feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Keep threads already marked as addressed.
    #[serde(default)]
    pub include_resolved: bool,

    /// Keep threads anchored to diff regions superseded by later pushes.
    #[serde(default)]
    pub include_outdated: bool,

    /// Also fetch PR-level comments with no file anchor.
    #[serde(default)]
    pub include_general: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_exclude_everything() {
        let options = FetchOptions::default();
        assert!(!options.include_resolved);
        assert!(!options.include_outdated);
        assert!(!options.include_general);
    }

    #[test]
    fn test_options_deserialize_partial() {
        let toml = r#"
            include_resolved = true
        "#;
        let options: FetchOptions = toml::from_str(toml).unwrap();
        assert!(options.include_resolved);
        // Other fields keep their defaults.
        assert!(!options.include_outdated);
        assert!(!options.include_general);
    }

    #[test]
    fn test_options_deserialize_empty() {
        let options: FetchOptions = toml::from_str("").unwrap();
        assert_eq!(options, FetchOptions::default());
    }
}
