//! Configuration model for lintgate.
//!
//! Settings come from four tool config path variables in the environment,
//! optionally layered over a YAML file passed with `--config`. Unknown YAML
//! fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{ExtraToolConfig, ToolRole};
