//! One hook invocation: payload in, report out.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{LintgateError, Result};
use crate::hook::HookData;
use crate::report::{render_json, render_text};
use crate::validate::Validator;
use std::io::{Read, Write};

/// Resolve configuration: YAML file (if any), then environment, then flags.
pub fn resolve_config<F>(cli: &Cli, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut config = base.with_env_overrides(lookup)?;
    if let Some(timeout) = cli.timeout_secs {
        config.timeout_seconds = timeout;
        config.validate()?;
    }

    Ok(config)
}

/// Validate the file described by the payload on `stdin` and write the
/// report to the configured channels.
///
/// A payload without a file path produces no output at all.
pub fn run<R, O, E>(cli: &Cli, config: &Config, stdin: R, stdout: &mut O, stderr: &mut E) -> Result<()>
where
    R: Read,
    O: Write,
    E: Write,
{
    let hook_data = match &cli.input {
        Some(path) => {
            let file = std::fs::File::open(path).map_err(|e| {
                LintgateError::UserError(format!(
                    "failed to open input file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            HookData::from_reader(file)?
        }
        None => HookData::from_reader(stdin)?,
    };

    let Some(input) = hook_data.to_input() else {
        log::debug!("no file path in {} payload; nothing to validate", hook_data.tool_name);
        return Ok(());
    };

    let validator = Validator::new(config)?;
    let result = validator.validate(&input)?;

    match cli.format {
        OutputFormat::Hook => {
            write_report(stdout, &format!("{}\n", render_json(&result)?))?;
            write_report(stderr, &render_text(&result))?;
        }
        OutputFormat::Json => write_report(stdout, &format!("{}\n", render_json(&result)?))?,
        OutputFormat::Text => write_report(stdout, &render_text(&result))?,
    }

    Ok(())
}

fn write_report<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| LintgateError::Io(format!("failed to write report: {}", e)))
}
