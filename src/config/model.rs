//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for a lintgate run.
///
/// Built once at process start from the environment and an optional YAML
/// file, then passed by reference into the validator. An empty config path
/// means "use the tool's own defaults".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Tool config paths
    // =========================================================================
    /// Path to a biome config file or directory.
    pub biome_config_path: String,

    /// Path to a ruff config file.
    pub ruff_config_path: String,

    /// Path to a pyright config file; its directory is passed as the project.
    pub pyright_config_path: String,

    /// Path to a markdownlint config file.
    pub markdownlint_config_path: String,

    // =========================================================================
    // Execution
    // =========================================================================
    /// Deadline for the whole validation pass, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    // =========================================================================
    // Tool catalog
    // =========================================================================
    /// Drop the built-in tools and use only `tools`.
    pub replace_builtins: bool,

    /// Extra tools appended after the built-in catalog.
    pub tools: Vec<ExtraToolConfig>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            biome_config_path: String::new(),
            ruff_config_path: String::new(),
            pyright_config_path: String::new(),
            markdownlint_config_path: String::new(),
            timeout_seconds: default_timeout_seconds(),
            replace_builtins: false,
            tools: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}
