//! Lintgate: post-edit validation hook for code-editing agents.
//!
//! Given a file path and its new content, lintgate stages the content in a
//! private temp file, runs the applicable formatters and linters against it,
//! and reports the outcome. It only informs; it never blocks the agent.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod hook;
pub mod report;
pub mod validate;
