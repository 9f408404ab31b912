//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into
//! services as `Arc<CareConfig>`. Nothing in this crate reads environment
//! variables during request handling; binaries resolve the config file path
//! and hand the parsed result down.

use std::path::Path;

use serde::Deserialize;

use crate::error::{RecordError, RecordResult};

/// KASP scheme configuration.
///
/// When enabled, eligible shifting requests are flagged and the referral
/// letter substitutes the programme's supporting unit for the hospital name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KaspConfig {
    pub enabled: bool,
    /// Human-readable name of the scheme, shown as the field label.
    pub full_string: String,
}

impl Default for KaspConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            full_string: "KASP".into(),
        }
    }
}

/// Deployment configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CareConfig {
    wartime_shifting: bool,
    kasp: KaspConfig,
    base_url: String,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            wartime_shifting: false,
            kasp: KaspConfig::default(),
            base_url: "http://localhost:3000".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KaspConfigWire {
    enabled: Option<bool>,
    full_string: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CareConfigWire {
    wartime_shifting: Option<bool>,
    kasp: KaspConfigWire,
    base_url: Option<String>,
}

impl CareConfig {
    /// Create a new `CareConfig`.
    pub fn new(
        wartime_shifting: bool,
        kasp: KaspConfig,
        base_url: String,
    ) -> RecordResult<Self> {
        if base_url.trim().is_empty() {
            return Err(RecordError::InvalidInput("base_url cannot be empty".into()));
        }
        if kasp.enabled && kasp.full_string.trim().is_empty() {
            return Err(RecordError::InvalidInput(
                "kasp.full_string cannot be empty when kasp is enabled".into(),
            ));
        }

        Ok(Self {
            wartime_shifting,
            kasp,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Parse a configuration from YAML text. Missing keys fall back to the
    /// defaults; unknown keys are rejected.
    pub fn from_yaml(text: &str) -> RecordResult<Self> {
        let wire: CareConfigWire =
            serde_yaml::from_str(text).map_err(RecordError::YamlDeserialization)?;
        let defaults = Self::default();
        let default_kasp = KaspConfig::default();

        Self::new(
            wire.wartime_shifting.unwrap_or(defaults.wartime_shifting),
            KaspConfig {
                enabled: wire.kasp.enabled.unwrap_or(default_kasp.enabled),
                full_string: wire.kasp.full_string.unwrap_or(default_kasp.full_string),
            },
            wire.base_url.unwrap_or(defaults.base_url),
        )
    }

    /// Load configuration from a YAML file, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> RecordResult<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(RecordError::FileRead)?;
                Self::from_yaml(&text)
            }
            None => Ok(Self::default()),
        }
    }

    /// Whether the deployment runs the wartime shifting workflow, with the
    /// extra approval stages and vehicle/facility preference fields.
    pub fn wartime_shifting(&self) -> bool {
        self.wartime_shifting
    }

    pub fn kasp(&self) -> &KaspConfig {
        &self.kasp
    }

    /// Public base URL of the deployment, without a trailing slash. Used for
    /// the verification link on referral letters.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_peacetime() {
        let cfg = CareConfig::default();
        assert!(!cfg.wartime_shifting());
        assert!(!cfg.kasp().enabled);
    }

    #[test]
    fn parses_a_full_config() {
        let cfg = CareConfig::from_yaml(
            r#"
wartime_shifting: true
kasp:
  enabled: true
  full_string: Karunya Arogya Suraksha Padhathi
base_url: https://care.example.org/
"#,
        )
        .expect("parse config");

        assert!(cfg.wartime_shifting());
        assert!(cfg.kasp().enabled);
        assert_eq!(cfg.kasp().full_string, "Karunya Arogya Suraksha Padhathi");
        assert_eq!(cfg.base_url(), "https://care.example.org");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = CareConfig::from_yaml("wartime_shifting: true\n").expect("parse config");
        assert!(cfg.wartime_shifting());
        assert_eq!(cfg.kasp().full_string, "KASP");
        assert_eq!(cfg.base_url(), "http://localhost:3000");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CareConfig::from_yaml("wartine_shifting: true\n").is_err());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(CareConfig::from_yaml("base_url: \"  \"\n").is_err());
    }
}
