//! JSON response read by the calling agent after a file edit.

use super::report_lines;
use crate::error::{LintgateError, Result};
use crate::validate::ValidationResult;
use serde::{Deserialize, Serialize};

/// Hook event this response answers.
pub const HOOK_EVENT_NAME: &str = "PostToolUse";

/// The only decision ever emitted. Validation informs; it never blocks.
pub const DECISION_APPROVE: &str = "approve";

pub const ISSUES_REASON: &str = "Validation completed with issues";

/// Top-level hook response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// Event-specific fields of the hook response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub decision: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub additional_context: String,
}

impl HookResponse {
    /// Build the response for a validation result.
    pub fn from_result(result: &ValidationResult) -> Self {
        let reason = if result.has_issues {
            ISSUES_REASON.to_string()
        } else {
            String::new()
        };

        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME.to_string(),
                decision: DECISION_APPROVE.to_string(),
                reason,
                additional_context: report_lines(result).join("\n"),
            },
        }
    }
}

/// Pretty-printed JSON hook response.
pub fn render_json(result: &ValidationResult) -> Result<String> {
    serde_json::to_string_pretty(&HookResponse::from_result(result))
        .map_err(|e| LintgateError::Io(format!("failed to serialize hook response: {}", e)))
}
