//! Validation engine for lintgate.
//!
//! One pass over a single file:
//! - Content rules: bold markup in markdown changes
//! - Staging: a private temp copy keeping the file's extension
//! - Formatters: run one after another against the staged copy
//! - Linters: run concurrently under one shared deadline
//! - Diff: report formatted content when the staged copy changed

pub mod markdown;
pub mod registry;
pub mod result;
pub mod runner;
pub mod staging;
pub mod validator;

#[cfg(all(test, unix))]
mod tests;

pub use markdown::check_bold_markup;
pub use registry::{Registry, ToolSpec};
pub use result::{MarkdownFinding, ToolOutcome, ValidationInput, ValidationResult};
pub use runner::Deadline;
pub use staging::{StagedFile, stage};
pub use validator::Validator;
