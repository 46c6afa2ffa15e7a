//! Config loading, environment overrides, and validation.

use super::model::Config;
use super::types::*;
use crate::error::{LintgateError, Result};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            LintgateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            LintgateError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Build a config from the process environment alone.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Fill config paths left empty from the given variable lookup.
    ///
    /// Values already set (e.g. by a YAML file) win over the environment.
    /// The timeout variable always wins when present, so a hook definition
    /// can tighten the deadline without editing the config file.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fill = |field: &mut String, key: &str| {
            if field.is_empty()
                && let Some(value) = lookup(key)
            {
                *field = value.trim().to_string();
            }
        };

        fill(&mut self.biome_config_path, BIOME_CONFIG_ENV);
        fill(&mut self.ruff_config_path, RUFF_CONFIG_ENV);
        fill(&mut self.pyright_config_path, PYRIGHT_CONFIG_ENV);
        fill(&mut self.markdownlint_config_path, MARKDOWNLINT_CONFIG_ENV);

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() {
                self.timeout_seconds = raw.parse().map_err(|_| {
                    LintgateError::UserError(format!(
                        "{} must be a whole number of seconds (found '{}')",
                        TIMEOUT_ENV, raw
                    ))
                })?;
            }
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `timeout_seconds` must be positive
    /// - every extra tool needs a name, a command, and at least one extension
    /// - extensions must not have leading dots
    pub fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(LintgateError::UserError(
                "config validation failed: timeout_seconds must be greater than 0".to_string(),
            ));
        }

        for tool in &self.tools {
            if tool.name.trim().is_empty() {
                return Err(LintgateError::UserError(
                    "config validation failed: every entry in tools needs a name".to_string(),
                ));
            }
            if tool.command.trim().is_empty() {
                return Err(LintgateError::UserError(format!(
                    "config validation failed: tool '{}' has an empty command",
                    tool.name
                )));
            }
            if tool.extensions.is_empty() {
                return Err(LintgateError::UserError(format!(
                    "config validation failed: tool '{}' must list at least one extension",
                    tool.name
                )));
            }
            for ext in &tool.extensions {
                if ext.starts_with('.') {
                    return Err(LintgateError::UserError(format!(
                        "config validation failed: tool '{}' extensions must not have leading dots (found '{}'). Use '{}' instead.",
                        tool.name,
                        ext,
                        ext.trim_start_matches('.')
                    )));
                }
            }
        }

        Ok(())
    }

    /// The pass-wide deadline as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
