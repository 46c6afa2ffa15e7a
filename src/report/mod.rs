//! Rendering of validation results for the calling agent and for humans.
//!
//! Both renderings carry the same lines: the plain-text report prints them,
//! the JSON hook response embeds them as additional context.

mod hook_json;


pub use hook_json::{HookResponse, HookSpecificOutput, render_json};

use crate::validate::ValidationResult;

/// Separator framing the issues banner.
pub const SEPARATOR: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Banner shown after the issue list.
pub const ISSUES_BANNER: &str = "⚠️  Validation issues found above - please review and address.";

pub const FORMATTED_MESSAGE: &str = "✓ Content was auto-formatted";
pub const SUCCESS_MESSAGE: &str = "✓ All checks passed";

/// Report lines for a result, without trailing newlines.
pub fn report_lines(result: &ValidationResult) -> Vec<String> {
    let mut lines = Vec::new();

    if result.was_formatted {
        lines.push(FORMATTED_MESSAGE.to_string());
    }

    for warning in &result.warnings {
        lines.push(format!("Warning: {}", warning));
    }

    if !result.has_issues {
        if !result.was_formatted {
            lines.push(SUCCESS_MESSAGE.to_string());
        }
        return lines;
    }

    if !result.markdown_findings.is_empty() {
        lines.push(String::new());
        lines.push("Markdown validation errors:".to_string());
        for finding in &result.markdown_findings {
            lines.push(format!(
                "  {}:{}: {}",
                finding.line, finding.column, finding.message
            ));
        }
    }

    for outcome in result.failed_outcomes() {
        lines.push(String::new());
        lines.push(format!("{} errors:", outcome.name));
        lines.extend(
            outcome
                .output
                .lines()
                .filter(|line| !line.is_empty())
                .map(|line| format!("  {}", line)),
        );
        if let Some(failure) = &outcome.failure {
            lines.push(format!("  Error: {}", failure));
        }
    }

    lines.push(String::new());
    lines.push(SEPARATOR.to_string());
    lines.push(ISSUES_BANNER.to_string());
    lines.push(SEPARATOR.to_string());

    lines
}

/// Plain-text report, one line per entry.
pub fn render_text(result: &ValidationResult) -> String {
    let mut text = report_lines(result).join("\n");
    text.push('\n');
    text
}
