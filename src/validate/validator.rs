//! The validation pass: content rules, staging, formatting, linting, diff.

use super::markdown::{check_bold_markup, is_markdown};
use super::registry::{Registry, ToolSpec};
use super::result::{ToolOutcome, ValidationInput, ValidationResult};
use super::runner::{self, Deadline};
use super::staging;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Runs every applicable check for one file.
///
/// Holds no per-pass state; each call to `validate` builds a fresh result.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Registry,
    timeout: Duration,
}

impl Validator {
    /// Build a validator with the built-in catalog plus configured tools.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            registry: Registry::from_config(config)?,
            timeout: config.timeout(),
        })
    }

    /// Build a validator over an explicit tool registry.
    pub fn with_registry(registry: Registry, timeout: Duration) -> Self {
        Self { registry, timeout }
    }

    /// Validate under the configured pass deadline.
    pub fn validate(&self, input: &ValidationInput) -> Result<ValidationResult> {
        self.validate_with_deadline(input, &Deadline::after(self.timeout))
    }

    /// Validate under an explicit deadline.
    ///
    /// Errors only on staging failure, deadline expiry, or I/O failure on the
    /// staged file. Tool failures are part of the returned result.
    pub fn validate_with_deadline(
        &self,
        input: &ValidationInput,
        deadline: &Deadline,
    ) -> Result<ValidationResult> {
        let mut result = ValidationResult::default();

        let Some(ext) = input.extension() else {
            return Ok(result);
        };

        if is_markdown(ext) && !input.change_text.is_empty() {
            result.add_findings(check_bold_markup(&input.change_text));
        }

        // External tools only ever see whole files.
        if input.is_partial_edit || input.full_text.is_empty() {
            return Ok(result);
        }

        let staged = staging::stage(&input.file_path, &input.full_text)?;

        for formatter in self.registry.formatters_for(ext) {
            if let Some(warning) = runner::run_formatter(formatter, staged.path(), deadline)? {
                log::warn!("{}", warning);
                result.warnings.push(warning);
            }
        }

        let linters = self.registry.linters_for(ext);
        for outcome in run_linters(&linters, staged.path(), deadline)? {
            result.add_outcome(outcome);
        }

        let content = staged.read()?;
        if content != input.full_text.as_bytes() {
            result.formatted_text = Some(String::from_utf8_lossy(&content).into_owned());
            result.was_formatted = true;
        }

        log::info!(
            "validated {}: {} finding(s), {} tool(s), formatted: {}",
            input.file_path,
            result.markdown_findings.len(),
            result.tool_outcomes.len(),
            result.was_formatted
        );

        Ok(result)
    }
}

/// Run all linters concurrently, one thread each, and return their outcomes
/// in the order given.
///
/// If any linter hits the deadline the whole batch fails; the deadline is
/// cancelled so the remaining linters stop promptly.
fn run_linters(
    linters: &[&ToolSpec],
    staged: &Path,
    deadline: &Deadline,
) -> Result<Vec<ToolOutcome>> {
    let results: Vec<Result<ToolOutcome>> = thread::scope(|scope| {
        let handles: Vec<_> = linters
            .iter()
            .map(|tool| (tool, scope.spawn(move || runner::run_linter(tool, staged, deadline))))
            .collect();

        handles
            .into_iter()
            .map(|(tool, handle)| {
                handle.join().unwrap_or_else(|_| {
                    Ok(ToolOutcome {
                        name: tool.name.clone(),
                        passed: false,
                        output: String::new(),
                        failure: Some(format!("{} runner panicked", tool.name)),
                    })
                })
            })
            .collect()
    });

    let mut outcomes = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                deadline.cancel();
                return Err(e);
            }
        }
    }
    Ok(outcomes)
}
