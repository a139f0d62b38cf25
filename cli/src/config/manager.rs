//! Settings store: environment values layered over defaults, plus overrides.

use std::collections::HashMap;

use super::defaults::{self, DEFAULT_SETTINGS};
use super::validation::validate_setting;

/// Resolved setting values keyed by setting name.
#[derive(Debug, Clone, Default)]
pub struct SettingsManager {
    values: HashMap<&'static str, String>,
}

impl SettingsManager {
    /// Read every known key from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read every known key through `lookup`. Invalid values are logged and
    /// the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut values = HashMap::new();
        for key in defaults::keys() {
            let Some(value) = lookup(key) else {
                continue;
            };
            match validate_setting(key, &value) {
                Ok(()) => {
                    values.insert(key, value);
                }
                Err(e) => tracing::warn!("Ignoring invalid {key}={value:?}: {e}"),
            }
        }
        Self { values }
    }

    /// Current value for `key`, falling back to its default.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(v) = self.values.get(key) {
            return Ok(v.clone());
        }
        defaults::get_default(key)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("unknown setting key: {key}"))
    }

    /// Validate and store a value, replacing whatever was loaded.
    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;
        let def = DEFAULT_SETTINGS
            .get(key)
            .ok_or_else(|| anyhow::anyhow!("unknown setting key: {key}"))?;
        self.values.insert(def.key, value.to_string());
        Ok(())
    }
}
