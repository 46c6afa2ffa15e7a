//! End-to-end tests for the validation pass, using `sh` scripts as tools.

use super::*;
use crate::config::ToolRole;
use crate::error::LintgateError;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// A tool running `body` with the staged path in `$1`.
fn script(name: &str, role: ToolRole, ext: &str, body: &str) -> ToolSpec {
    ToolSpec::new(name, role, "sh", &["-c", body, name], &[ext])
}

fn validator(tools: Vec<ToolSpec>) -> Validator {
    Validator::with_registry(Registry::from_tools(tools), Duration::from_secs(20))
}

#[test]
fn test_partial_markdown_edit_reports_bold_without_tools() {
    let v = validator(vec![script("mdl", ToolRole::Linter, "md", "exit 1")]);
    let input = ValidationInput::partial_edit("a.md", "This is **bold**");

    let result = v.validate(&input).unwrap();

    assert_eq!(result.markdown_findings.len(), 1);
    assert_eq!(result.markdown_findings[0].line, 1);
    assert_eq!(result.markdown_findings[0].column, 9);
    assert!(result.has_issues);
    assert!(result.tool_outcomes.is_empty());
    assert!(!result.was_formatted);
}

#[test]
fn test_no_extension_short_circuits() {
    let v = validator(vec![script("any", ToolRole::Linter, "md", "exit 1")]);
    let input = ValidationInput::full_file("Makefile", "all:\n\t**x**\n");

    let result = v.validate(&input).unwrap();
    assert_eq!(result, ValidationResult::default());
}

#[test]
fn test_partial_edit_of_code_is_clean() {
    let v = validator(vec![script("ruffish", ToolRole::Linter, "py", "exit 1")]);
    let input = ValidationInput::partial_edit("a.py", "x=1");

    let result = v.validate(&input).unwrap();
    assert!(result.markdown_findings.is_empty());
    assert!(result.tool_outcomes.is_empty());
    assert!(!result.has_issues);
}

#[test]
fn test_empty_full_text_runs_no_tools() {
    let v = validator(vec![script("ruffish", ToolRole::Linter, "py", "exit 1")]);
    let input = ValidationInput::full_file("a.py", "");

    let result = v.validate(&input).unwrap();
    assert!(result.tool_outcomes.is_empty());
    assert!(!result.has_issues);
}

#[test]
fn test_python_linter_flags_missing_spaces() {
    let lint = script(
        "ruffish",
        ToolRole::Linter,
        "py",
        r#"if grep -n "[a-z]=[0-9]" "$1"; then echo "E225 missing whitespace around operator"; exit 1; fi"#,
    );
    let v = validator(vec![lint]);

    let result = v.validate(&ValidationInput::full_file("a.py", "x=1\n")).unwrap();

    assert_eq!(result.tool_outcomes.len(), 1);
    let outcome = &result.tool_outcomes[0];
    assert!(!outcome.passed);
    assert!(outcome.output.contains("1:x=1"));
    assert!(outcome.output.contains("E225"));
    assert_eq!(outcome.failure.as_deref(), Some("ruffish exited with code 1"));
    assert!(result.has_issues);
}

#[test]
fn test_outcomes_follow_registry_order_not_completion_order() {
    let v = validator(vec![
        script("slow", ToolRole::Linter, "ts", "sleep 0.3; echo slow done"),
        script("fast", ToolRole::Linter, "ts", "echo fast done; exit 2"),
        script("other-ext", ToolRole::Linter, "py", "exit 0"),
        script("mid", ToolRole::Linter, "ts", "sleep 0.1"),
    ]);

    let result = v
        .validate(&ValidationInput::full_file("src/app.ts", "let a = 1;\n"))
        .unwrap();

    let names: Vec<_> = result.tool_outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["slow", "fast", "mid"]);
    assert!(result.tool_outcomes[0].passed);
    assert!(!result.tool_outcomes[1].passed);
    assert!(result.tool_outcomes[2].passed);
    assert!(result.has_issues);
}

#[test]
fn test_failing_linter_does_not_affect_siblings() {
    let v = validator(vec![
        script("broken", ToolRole::Linter, "py", "exit 127"),
        ToolSpec::new(
            "missing",
            ToolRole::Linter,
            "lintgate-no-such-linter",
            &[],
            &["py"],
        ),
        script("fine", ToolRole::Linter, "py", "echo ok"),
    ]);

    let result = v.validate(&ValidationInput::full_file("a.py", "x = 1\n")).unwrap();

    assert_eq!(result.tool_outcomes.len(), 3);
    assert!(!result.tool_outcomes[0].passed);
    assert!(!result.tool_outcomes[1].passed);
    assert!(
        result.tool_outcomes[1]
            .failure
            .as_deref()
            .unwrap()
            .starts_with("failed to run missing")
    );
    assert!(result.tool_outcomes[2].passed);
    assert_eq!(result.tool_outcomes[2].output, "ok");
}

#[test]
fn test_formatter_change_is_reported_and_seen_by_linters() {
    let v = validator(vec![
        script("fmt", ToolRole::Formatter, "py", r#"printf 'x = 1\n' > "$1""#),
        script("check-fmt", ToolRole::Linter, "py", r#"grep -q "x = 1" "$1""#),
    ]);

    let result = v.validate(&ValidationInput::full_file("a.py", "x=1\n")).unwrap();

    assert!(result.was_formatted);
    assert_eq!(result.formatted_text.as_deref(), Some("x = 1\n"));
    assert!(result.tool_outcomes[0].passed);
    assert!(!result.has_issues);
}

#[test]
fn test_formatters_run_in_registry_order() {
    let v = validator(vec![
        script("first", ToolRole::Formatter, "py", r#"printf 'a' >> "$1""#),
        script("second", ToolRole::Formatter, "py", r#"printf 'b' >> "$1""#),
    ]);

    let result = v.validate(&ValidationInput::full_file("a.py", "#")).unwrap();
    assert_eq!(result.formatted_text.as_deref(), Some("#ab"));
}

#[test]
fn test_unchanged_content_is_not_formatted() {
    let v = validator(vec![
        script("noop-fmt", ToolRole::Formatter, "py", "exit 0"),
        script("lint", ToolRole::Linter, "py", "exit 0"),
    ]);

    let result = v.validate(&ValidationInput::full_file("a.py", "x = 1\n")).unwrap();
    assert!(!result.was_formatted);
    assert!(result.formatted_text.is_none());
}

#[test]
fn test_no_applicable_tools_still_stages_cleanly() {
    let v = validator(Vec::new());
    let result = v.validate(&ValidationInput::full_file("a.py", "x = 1\n")).unwrap();
    assert!(result.tool_outcomes.is_empty());
    assert!(!result.was_formatted);
    assert!(!result.has_issues);
}

#[test]
fn test_formatter_failure_is_a_warning_not_an_issue() {
    let v = validator(vec![
        script("bad-fmt", ToolRole::Formatter, "py", "echo syntax error >&2; exit 2"),
        script("lint", ToolRole::Linter, "py", "exit 0"),
    ]);

    let result = v.validate(&ValidationInput::full_file("a.py", "x = (\n")).unwrap();

    assert!(!result.has_issues);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("bad-fmt formatting failed"));
    assert!(result.warnings[0].contains("syntax error"));
    assert_eq!(result.tool_outcomes.len(), 1);
}

#[test]
fn test_deadline_expiry_aborts_the_pass() {
    let v = validator(vec![
        script("sleepy", ToolRole::Linter, "py", "sleep 1"),
        script("quick", ToolRole::Linter, "py", "exit 0"),
    ]);
    let deadline = Deadline::after(Duration::from_millis(1));

    let start = Instant::now();
    let err = v
        .validate_with_deadline(&ValidationInput::full_file("a.py", "x = 1\n"), &deadline)
        .unwrap_err();

    assert!(matches!(err, LintgateError::DeadlineExceeded(_)));
    assert!(start.elapsed() < Duration::from_millis(900));
}

#[test]
fn test_configured_timeout_applies_to_validate() {
    let v = Validator::with_registry(
        Registry::from_tools(vec![script("sleepy", ToolRole::Linter, "py", "sleep 5")]),
        Duration::from_millis(150),
    );

    let err = v
        .validate(&ValidationInput::full_file("a.py", "x = 1\n"))
        .unwrap_err();
    assert!(matches!(err, LintgateError::DeadlineExceeded(_)));
}

#[test]
fn test_staged_file_is_removed_after_pass() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("seen");
    let record_script = format!(r#"printf '%s' "$1" > '{}'"#, record.display());

    let v = validator(vec![script("recorder", ToolRole::Linter, "md", &record_script)]);
    let result = v
        .validate(&ValidationInput::full_file("docs/guide.md", "# Guide\n"))
        .unwrap();
    assert!(result.tool_outcomes[0].passed);

    let staged_path = std::fs::read_to_string(&record).unwrap();
    assert!(staged_path.ends_with(".md"), "staged as {}", staged_path);
    assert!(staged_path.contains("guide."));
    assert!(!std::path::Path::new(&staged_path).exists());
}

#[test]
fn test_staged_file_is_removed_after_deadline() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("seen");
    let record_script = format!(r#"printf '%s' "$1" > '{}'; sleep 5"#, record.display());

    let v = Validator::with_registry(
        Registry::from_tools(vec![script("recorder", ToolRole::Linter, "py", &record_script)]),
        Duration::from_millis(500),
    );
    let err = v.validate(&ValidationInput::full_file("a.py", "x = 1\n"));
    assert!(err.is_err());

    let staged_path = std::fs::read_to_string(&record).unwrap();
    assert!(!std::path::Path::new(&staged_path).exists());
}

#[test]
fn test_markdown_write_combines_findings_and_linters() {
    let v = validator(vec![script(
        "mdl",
        ToolRole::Linter,
        "md",
        r#"echo "$1:1 MD041/first-line-heading"; exit 1"#,
    )]);
    let input = ValidationInput::full_file("README.md", "intro\n\nsome __strong__ words\n");

    let result = v.validate(&input).unwrap();

    assert_eq!(result.markdown_findings.len(), 1);
    assert_eq!(result.markdown_findings[0].line, 3);
    assert_eq!(result.markdown_findings[0].column, 6);
    assert_eq!(result.tool_outcomes.len(), 1);
    assert!(result.tool_outcomes[0].output.contains("MD041"));
    assert!(result.has_issues);
}
