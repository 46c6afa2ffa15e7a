//! Markdown content rules applied to the changed text itself.
//!
//! Bold markup is not allowed in prose written by the agent. The check is
//! purely textual and line-based; it never touches the filesystem.

use super::result::MarkdownFinding;
use regex::Regex;
use std::sync::LazyLock;

static BOLD_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").expect("valid bold asterisk regex"));

static BOLD_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__[^_]+__").expect("valid bold underscore regex"));

/// Extensions the markdown rules apply to (lowercase).
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Whether `ext` names a markdown file.
pub fn is_markdown(ext: &str) -> bool {
    MARKDOWN_EXTENSIONS
        .iter()
        .any(|m| m.eq_ignore_ascii_case(ext))
}

/// Find `**bold**` and `__bold__` spans, one finding per match.
///
/// Lines and columns are 1-based; the column is the byte offset of the
/// match start. Matches never span lines. On each line all `**` findings are
/// reported before `__` findings.
pub fn check_bold_markup(text: &str) -> Vec<MarkdownFinding> {
    let mut findings = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        for (pattern, delimiter) in [(&*BOLD_ASTERISK, "**"), (&*BOLD_UNDERSCORE, "__")] {
            for m in pattern.find_iter(line) {
                findings.push(MarkdownFinding {
                    line: idx + 1,
                    column: m.start() + 1,
                    message: format!(
                        "Bold text using {} is not allowed: {}",
                        delimiter,
                        m.as_str()
                    ),
                });
            }
        }
    }

    findings
}
