//! Configuration types and defaults for lintgate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Environment variable holding the biome config path.
pub const BIOME_CONFIG_ENV: &str = "BIOME_CONFIG_PATH";
/// Environment variable holding the ruff config path.
pub const RUFF_CONFIG_ENV: &str = "RUFF_CONFIG_PATH";
/// Environment variable holding the pyright config path.
pub const PYRIGHT_CONFIG_ENV: &str = "PYRIGHT_CONFIG_PATH";
/// Environment variable holding the markdownlint config path.
pub const MARKDOWNLINT_CONFIG_ENV: &str = "MARKDOWNLINT_CONFIG_PATH";
/// Environment variable overriding the pass deadline, in seconds.
pub const TIMEOUT_ENV: &str = "LINTGATE_TIMEOUT_SECS";

/// Whether a tool rewrites the staged file or reports on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolRole {
    /// Rewrites the staged file in place; only success/failure matters.
    Formatter,
    /// Reports findings; produces a `ToolOutcome`.
    #[default]
    Linter,
}

/// A user-declared tool from the YAML config file.
///
/// ```yaml
/// tools:
///   - name: shellcheck
///     command: shellcheck --format=gcc {file}
///     extensions: [sh, bash]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraToolConfig {
    /// Display name used in reports.
    pub name: String,

    /// Formatter or linter (default: linter).
    pub role: ToolRole,

    /// Command line (shell-words parsed; no shell). `{file}` is replaced by
    /// the staged path, otherwise the path is appended.
    pub command: String,

    /// File extensions this tool applies to (no leading dots).
    pub extensions: Vec<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

pub(crate) fn default_timeout_seconds() -> u64 {
    30
}
