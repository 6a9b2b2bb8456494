use crate::core::error::ConfigError;
use crate::core::hooks::{FailureHook, PanicHook};
use crate::core::store::OverrideEntry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Startup knobs consumed once by `OverrideStore::init`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Overrides applied on top of feature defaults, in declaration order.
    #[serde(rename = "override")]
    pub overrides: Vec<OverrideEntry>,

    /// Invoked on contract violations. Not part of the on-disk format.
    #[serde(skip, default = "default_failure_hook")]
    pub failure_hook: Arc<dyn FailureHook>,
}

fn default_failure_hook() -> Arc<dyn FailureHook> {
    Arc::new(PanicHook)
}

impl Default for FlagConfig {
    fn default() -> Self {
        FlagConfig {
            overrides: Vec::new(),
            failure_hook: default_failure_hook(),
        }
    }
}

impl FlagConfig {
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {:?}", path.as_ref()))?;
        let config: FlagConfig =
            toml::from_str(&raw).with_context(|| "parsing override config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from parallel name/value lists. Rejects mismatched
    /// lengths instead of silently pairing up a prefix.
    pub fn from_pairs(names: &[&str], values: &[bool]) -> Result<Self, ConfigError> {
        if names.len() != values.len() {
            return Err(ConfigError::LengthMismatch {
                names: names.len(),
                values: values.len(),
            });
        }

        let mut config = Self::default();
        for (name, enabled) in names.iter().zip(values.iter()) {
            config.overrides.push(OverrideEntry {
                name: name.to_string(),
                enabled: *enabled,
            });
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_override(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.overrides.push(OverrideEntry {
            name: name.into(),
            enabled,
        });
        self
    }

    pub fn with_failure_hook(mut self, hook: Arc<dyn FailureHook>) -> Self {
        self.failure_hook = hook;
        self
    }

    /// Every override must carry a non-empty name; an empty name could never
    /// match a well-formed feature.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.overrides.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FlagConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagConfig(overrides={})", self.overrides.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hooks::Violation;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = FlagConfig::default();
        assert!(config.overrides.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_pairs_preserves_order() {
        let config = FlagConfig::from_pairs(&["with-cats", "with-dogs"], &[true, false])
            .expect("parallel lists should build");

        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].name, "with-cats");
        assert!(config.overrides[0].enabled);
        assert_eq!(config.overrides[1].name, "with-dogs");
        assert!(!config.overrides[1].enabled);
    }

    #[test]
    fn test_from_pairs_rejects_length_mismatch() {
        let err = FlagConfig::from_pairs(&["with-cats", "with-dogs"], &[true]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LengthMismatch {
                names: 2,
                values: 1
            }
        ));
    }

    #[test]
    fn test_validate_rejects_empty_override_name() {
        let config = FlagConfig::default()
            .with_override("with-cats", true)
            .with_override("", false);

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName { index: 1 }));
    }

    #[test]
    fn test_toml_override_tables_parse_in_file_order() {
        let raw = r#"
            [[override]]
            name = "with-cats"
            enabled = false

            [[override]]
            name = "with-dogs"
            enabled = true
        "#;

        let config: FlagConfig = toml::from_str(raw).expect("TOML should parse");
        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].name, "with-cats");
        assert!(!config.overrides[0].enabled);
        assert_eq!(config.overrides[1].name, "with-dogs");
        assert!(config.overrides[1].enabled);
    }

    #[test]
    fn test_closures_are_accepted_as_hooks() {
        let config =
            FlagConfig::default().with_failure_hook(Arc::new(|_violation: &Violation<'_>| {}));
        assert!(config.overrides.is_empty());
    }
}
