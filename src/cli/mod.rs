//! CLI argument parsing for lintgate.
//!
//! Uses clap derive macros. The hook payload itself arrives on stdin; flags
//! only tune configuration and output channels.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Lintgate: post-edit validation hook for code-editing agents.
///
/// Reads a tool invocation payload on stdin, runs the applicable formatters
/// and linters against a private copy of the file, and reports the results.
/// Issues are reported but never block the agent.
#[derive(Parser, Debug, Default)]
#[command(name = "lintgate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Where to write the report.
    ///
    /// `hook` writes the JSON hook response to stdout and a plain-text report
    /// to stderr.
    #[arg(long, value_enum, default_value_t = OutputFormat::Hook)]
    pub format: OutputFormat,

    /// YAML config file (tool config paths, timeout, extra tools).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Deadline for the whole validation pass, in seconds.
    ///
    /// Overrides the config file and LINTGATE_TIMEOUT_SECS.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Read the payload from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Report channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON response on stdout, plain text on stderr.
    #[default]
    Hook,
    /// JSON response on stdout only.
    Json,
    /// Plain text on stdout only.
    Text,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
