//! Hook payload parsing.
//!
//! The calling agent sends one JSON object on stdin describing the tool it
//! just ran. `Edit` invocations carry only the replaced fragment; every
//! other tool (e.g. `Write`) carries the full file body.

use crate::error::{LintgateError, Result};
use crate::validate::ValidationInput;
use serde::Deserialize;
use std::io::Read;

/// Tool name for fragment edits.
pub const EDIT_TOOL: &str = "Edit";

/// JSON payload passed to the hook.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HookData {
    pub tool_name: String,
    pub tool_input: ToolInput,
}

/// Parameters of the tool invocation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolInput {
    pub file_path: String,
    /// Replaced text (Edit).
    pub old_string: String,
    /// Replacement text (Edit).
    pub new_string: String,
    /// Full file body (Write).
    pub content: String,
}

impl HookData {
    /// Read and parse a payload from `reader`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw).map_err(|e| {
            LintgateError::UserError(format!("failed to read hook data: {}", e))
        })?;
        Self::from_json(&raw)
    }

    /// Parse a payload from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| LintgateError::UserError(format!("failed to parse hook JSON: {}", e)))
    }

    pub fn is_edit(&self) -> bool {
        self.tool_name == EDIT_TOOL
    }

    /// The validation request this payload describes, or `None` when there
    /// is no file to validate.
    pub fn to_input(&self) -> Option<ValidationInput> {
        let input = &self.tool_input;
        if input.file_path.is_empty() {
            return None;
        }

        if self.is_edit() {
            Some(ValidationInput::partial_edit(
                &input.file_path,
                &input.new_string,
            ))
        } else {
            Some(ValidationInput::full_file(&input.file_path, &input.content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_payload_is_full_file() {
        let json = r#"{
            "tool_name": "Write",
            "tool_input": {"file_path": "/repo/a.py", "content": "x=1\n"}
        }"#;
        let data = HookData::from_json(json).unwrap();
        let input = data.to_input().unwrap();

        assert!(!data.is_edit());
        assert_eq!(input.file_path, "/repo/a.py");
        assert_eq!(input.full_text, "x=1\n");
        assert_eq!(input.change_text, "x=1\n");
        assert!(!input.is_partial_edit);
    }

    #[test]
    fn test_edit_payload_is_partial() {
        let json = r#"{
            "tool_name": "Edit",
            "tool_input": {
                "file_path": "notes.md",
                "old_string": "plain",
                "new_string": "This is **bold**"
            }
        }"#;
        let input = HookData::from_json(json).unwrap().to_input().unwrap();

        assert!(input.is_partial_edit);
        assert_eq!(input.change_text, "This is **bold**");
        assert!(input.full_text.is_empty());
    }

    #[test]
    fn test_missing_file_path_yields_no_input() {
        let data = HookData::from_json(r#"{"tool_name": "Bash", "tool_input": {}}"#).unwrap();
        assert!(data.to_input().is_none());

        let data = HookData::from_json("{}").unwrap();
        assert!(data.to_input().is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "session_id": "abc",
            "hook_event_name": "PostToolUse",
            "tool_name": "Write",
            "tool_input": {"file_path": "a.ts", "content": "let a;", "extra": 1},
            "tool_response": {"success": true}
        }"#;
        let input = HookData::from_json(json).unwrap().to_input().unwrap();
        assert_eq!(input.file_path, "a.ts");
    }

    #[test]
    fn test_invalid_json_is_user_error() {
        let err = HookData::from_json("not json").unwrap_err();
        assert!(matches!(err, LintgateError::UserError(_)));
        assert!(err.to_string().contains("failed to parse hook JSON"));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"tool_name":"Write","tool_input":{"file_path":"a.md","content":"hi"}}"#;
        let data = HookData::from_reader(&json[..]).unwrap();
        assert_eq!(data.tool_input.content, "hi");
    }
}
