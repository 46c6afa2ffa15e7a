//! Data shapes shared by the validator, the runner, and the report renderers.

use serde::Serialize;

/// A single validation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationInput {
    /// Path of the file being edited. Only its name and extension are used.
    pub file_path: String,
    /// The text that was actually changed; checked by the content rules.
    pub change_text: String,
    /// The complete file body; empty for partial edits.
    pub full_text: String,
    /// True when only a fragment of the file is known.
    pub is_partial_edit: bool,
}

impl ValidationInput {
    /// A whole-file submission: the change is the entire body.
    pub fn full_file(file_path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            file_path: file_path.into(),
            change_text: content.clone(),
            full_text: content,
            is_partial_edit: false,
        }
    }

    /// A partial edit: only the replacement fragment is known.
    pub fn partial_edit(file_path: impl Into<String>, change_text: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            change_text: change_text.into(),
            full_text: String::new(),
            is_partial_edit: true,
        }
    }

    /// The file extension without the leading dot, if any.
    pub fn extension(&self) -> Option<&str> {
        file_extension(&self.file_path)
    }
}

/// Extension of the last path component, without the dot.
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Outcome of running one linter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolOutcome {
    pub name: String,
    pub passed: bool,
    /// Combined stdout and stderr, trimmed.
    pub output: String,
    /// Why the tool did not pass cleanly: non-zero exit or launch failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// A markdown content rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownFinding {
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column of the match start.
    pub column: usize,
    pub message: String,
}

/// Aggregated result of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub markdown_findings: Vec<MarkdownFinding>,
    /// Linter outcomes in registry order.
    pub tool_outcomes: Vec<ToolOutcome>,
    pub has_issues: bool,
    /// Staged content after formatting, when it differs from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_text: Option<String>,
    pub was_formatted: bool,
    /// Formatter failures. Informational only; never sets `has_issues`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn add_findings(&mut self, findings: Vec<MarkdownFinding>) {
        if !findings.is_empty() {
            self.has_issues = true;
        }
        self.markdown_findings.extend(findings);
    }

    pub(crate) fn add_outcome(&mut self, outcome: ToolOutcome) {
        if !outcome.passed {
            self.has_issues = true;
        }
        self.tool_outcomes.push(outcome);
    }

    /// Outcomes of tools that did not pass.
    pub fn failed_outcomes(&self) -> impl Iterator<Item = &ToolOutcome> {
        self.tool_outcomes.iter().filter(|o| !o.passed)
    }
}
