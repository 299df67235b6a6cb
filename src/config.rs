use serde::Deserialize;

use crate::error::CheckError;

/// Threshold used by [`test`](crate::test) and by [`CheckConfig::default`].
pub const DEFAULT_THRESHOLD: f64 = 90.0;

/// Settings for a [`Checker`](crate::Checker).
///
/// Every field has a default, so a TOML snippet only needs the keys it overrides:
///
/// ```toml
/// threshold = 95.0
///
/// [cover]
/// confidence_threshold = 0.8
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Minimum coverage percentage required by [`Checker::test`](crate::Checker::test).
    pub threshold: f64,
    /// Options passed to the scorer on every call.
    pub cover: CoverOptions,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            threshold: DEFAULT_THRESHOLD,
            cover: CoverOptions::default(),
        }
    }
}

impl CheckConfig {
    /// Parse a configuration from TOML text supplied by the caller.
    pub fn from_toml_str(content: &str) -> Result<Self, CheckError> {
        Ok(toml::from_str(content)?)
    }
}

/// Tuning knobs for a [`Scorer`](crate::license::Scorer).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverOptions {
    /// Score (`0..=1`) at which the whole text counts as one identified license.
    pub confidence_threshold: f32,
    /// Score at which a scan stops looking for further licenses.
    pub shallow_limit: f32,
    /// Trim surrounding non-license text and keep scanning for further
    /// licenses after the best match; without it only the whole text is scored.
    pub optimize: bool,
    /// Maximum number of passes when looking for several licenses in one text.
    pub max_passes: u16,
    /// Best-match scores below this are reported as no coverage at all.
    pub min_score: f32,
}

impl Default for CoverOptions {
    fn default() -> Self {
        CoverOptions {
            confidence_threshold: 0.9,
            shallow_limit: 0.99,
            optimize: true,
            max_passes: 10,
            min_score: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CheckConfig::default();
        assert_eq!(cfg.threshold, 90.0);
        assert_eq!(cfg.cover.confidence_threshold, 0.9);
        assert_eq!(cfg.cover.max_passes, 10);
        assert!(cfg.cover.optimize);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(CheckConfig::from_toml_str("").unwrap(), CheckConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let cfg = CheckConfig::from_toml_str(
            r#"
threshold = 75.5

[cover]
optimize = false
min_score = 0.25
"#,
        )
        .unwrap();
        assert_eq!(cfg.threshold, 75.5);
        assert!(!cfg.cover.optimize);
        assert_eq!(cfg.cover.min_score, 0.25);
        assert_eq!(cfg.cover.shallow_limit, 0.99);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CheckConfig::from_toml_str("treshold = 80.0").unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(CheckConfig::from_toml_str("threshold = \"high\"").is_err());
    }
}
