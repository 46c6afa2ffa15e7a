//! Exit code constants for the lintgate CLI.
//!
//! The hook never blocks the calling agent, so findings do not change the
//! exit code:
//! - 0: Report produced (with or without validation issues)
//! - 1: Fatal error (bad payload, staging failure, deadline expiry)

/// A report was produced.
pub const SUCCESS: i32 = 0;

/// Fatal error: the pass was aborted and no report was produced.
pub const ERROR: i32 = 1;
