//! Tool catalog: which formatters and linters apply to which extensions.
//!
//! The built-in catalog is fixed. Config paths are substituted into each
//! tool's arguments when the registry is built, so a `ToolSpec` carries
//! everything the runner needs.

use super::markdown::MARKDOWN_EXTENSIONS;
use crate::config::{Config, ExtraToolConfig, ToolRole};
use crate::error::{LintgateError, Result};
use std::path::Path;

/// Placeholder in a configured command line replaced by the staged path.
pub const FILE_PLACEHOLDER: &str = "{file}";

const JS_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs"];
const PY_EXTENSIONS: &[&str] = &["py"];

/// One formatter or linter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Display name used in reports.
    pub name: String,
    pub role: ToolRole,
    /// Executable to launch.
    pub program: String,
    /// Arguments; `{file}` marks the staged path, otherwise it is appended.
    pub args: Vec<String>,
    /// Lowercase extensions without leading dots.
    pub extensions: Vec<String>,
}

impl ToolSpec {
    pub fn new(
        name: impl Into<String>,
        role: ToolRole,
        program: impl Into<String>,
        args: &[&str],
        extensions: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            role,
            program: program.into(),
            args: args.iter().map(|s| s.to_string()).collect(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
        }
    }

    /// Whether this tool handles files with extension `ext`.
    pub fn applies(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        !ext.is_empty() && self.extensions.iter().any(|e| *e == ext)
    }

    /// Arguments with the staged path substituted in.
    pub fn args_for(&self, staged: &Path) -> Vec<String> {
        let staged = staged.to_string_lossy();
        if self.args.iter().any(|a| a.contains(FILE_PLACEHOLDER)) {
            self.args
                .iter()
                .map(|a| a.replace(FILE_PLACEHOLDER, &staged))
                .collect()
        } else {
            let mut args = self.args.clone();
            args.push(staged.into_owned());
            args
        }
    }

    /// Build a tool from a configured command line.
    fn from_config(tool: &ExtraToolConfig) -> Result<Self> {
        let words = shell_words::split(tool.command.trim()).map_err(|e| {
            LintgateError::UserError(format!(
                "failed to parse command for tool '{}': {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
                tool.name, e, tool.command
            ))
        })?;

        let (program, args) = words.split_first().ok_or_else(|| {
            LintgateError::UserError(format!(
                "command for tool '{}' is empty after parsing",
                tool.name
            ))
        })?;

        Ok(Self {
            name: tool.name.clone(),
            role: tool.role,
            program: program.clone(),
            args: args.to_vec(),
            extensions: tool
                .extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
        })
    }
}

/// Ordered catalog of tools.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tools: Vec<ToolSpec>,
}

impl Registry {
    /// Registry with exactly the given tools, in order.
    pub fn from_tools(tools: Vec<ToolSpec>) -> Self {
        Self { tools }
    }

    /// Built-in catalog followed by any tools declared in config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut tools = if config.replace_builtins {
            Vec::new()
        } else {
            builtin_tools(config)
        };

        for tool in &config.tools {
            tools.push(ToolSpec::from_config(tool)?);
        }

        Ok(Self { tools })
    }

    /// All registered tools in declaration order.
    pub fn tools(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Formatters for `ext`, in declaration order.
    pub fn formatters_for(&self, ext: &str) -> Vec<&ToolSpec> {
        self.matching(ToolRole::Formatter, ext)
    }

    /// Linters for `ext`, in declaration order.
    pub fn linters_for(&self, ext: &str) -> Vec<&ToolSpec> {
        self.matching(ToolRole::Linter, ext)
    }

    fn matching(&self, role: ToolRole, ext: &str) -> Vec<&ToolSpec> {
        self.tools
            .iter()
            .filter(|t| t.role == role && t.applies(ext))
            .collect()
    }
}

/// The fixed catalog, with config paths substituted.
fn builtin_tools(config: &Config) -> Vec<ToolSpec> {
    vec![
        ruff_format(config),
        biome(config),
        ruff(config),
        pyright(config),
        markdownlint(config),
    ]
}

fn ruff_format(config: &Config) -> ToolSpec {
    let mut tool = ToolSpec::new(
        "ruff-format",
        ToolRole::Formatter,
        "ruff",
        &["format"],
        PY_EXTENSIONS,
    );
    if !config.ruff_config_path.is_empty() {
        tool.args.push(format!("--config={}", config.ruff_config_path));
    }
    tool
}

fn biome(config: &Config) -> ToolSpec {
    let mut tool = ToolSpec::new(
        "biome",
        ToolRole::Linter,
        "biome",
        &["check", "--write"],
        JS_EXTENSIONS,
    );
    if !config.biome_config_path.is_empty() {
        // --config-path takes a directory
        let path = Path::new(&config.biome_config_path);
        let dir = if path.extension().is_some_and(|e| e == "json") {
            parent_or_dot(path)
        } else {
            config.biome_config_path.clone()
        };
        tool.args.push(format!("--config-path={}", dir));
    }
    // Staged files live outside the repo and may match VCS ignore rules.
    tool.args.push("--vcs-use-ignore-file=false".to_string());
    tool
}

fn ruff(config: &Config) -> ToolSpec {
    let mut tool = ToolSpec::new(
        "ruff",
        ToolRole::Linter,
        "ruff",
        &["check", "--fix"],
        PY_EXTENSIONS,
    );
    if !config.ruff_config_path.is_empty() {
        tool.args.push(format!("--config={}", config.ruff_config_path));
    }
    tool
}

fn pyright(config: &Config) -> ToolSpec {
    let mut tool = ToolSpec::new(
        "pyright",
        ToolRole::Linter,
        "pyright",
        &[],
        PY_EXTENSIONS,
    );
    if !config.pyright_config_path.is_empty() {
        let project = parent_or_dot(Path::new(&config.pyright_config_path));
        tool.args.push(format!("--project={}", project));
    }
    tool
}

fn markdownlint(config: &Config) -> ToolSpec {
    let mut tool = ToolSpec::new(
        "markdownlint",
        ToolRole::Linter,
        "markdownlint",
        &[],
        MARKDOWN_EXTENSIONS,
    );
    if !config.markdownlint_config_path.is_empty() {
        tool.args.push("-c".to_string());
        tool.args.push(config.markdownlint_config_path.clone());
    }
    tool
}

fn parent_or_dot(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
