//! Temp file staging for a validation pass.
//!
//! Tools only ever see a private copy of the content. The copy keeps the
//! original extension so tools pick the right language mode, and it is
//! removed when the returned guard is dropped.

use super::result::file_extension;
use crate::error::{LintgateError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// RAII guard for the staged copy of a file.
///
/// When dropped, the file is deleted. Deletion failures are logged, not
/// propagated.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Path to the staged file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current staged bytes.
    pub fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| {
            LintgateError::Io(format!(
                "failed to read staged file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!(
                "failed to remove staged file '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Stage `content` in the system temp directory.
pub fn stage(original_path: &str, content: &str) -> Result<StagedFile> {
    stage_in(&std::env::temp_dir(), original_path, content)
}

/// Stage `content` in `dir` under a unique name ending in the extension of
/// `original_path`.
///
/// The file is created with owner-only permissions.
pub fn stage_in(dir: &Path, original_path: &str, content: &str) -> Result<StagedFile> {
    let ext = file_extension(original_path);
    let file_name = original_path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(original_path);
    let stem = match ext {
        Some(ext) => &file_name[..file_name.len() - ext.len() - 1],
        None => file_name,
    };
    let stem = if stem.is_empty() { "lintgate" } else { stem };

    let prefix = format!("{}.", stem);
    let suffix = ext.map(|ext| format!(".{}", ext)).unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(|e| {
            LintgateError::Staging(format!(
                "failed to create temp file in '{}': {}",
                dir.display(),
                e
            ))
        })?;

    // Until `keep` succeeds, the NamedTempFile removes itself on error.
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| {
            LintgateError::Staging(format!(
                "failed to write temp file '{}': {}",
                file.path().display(),
                e
            ))
        })?;

    let path = file
        .into_temp_path()
        .keep()
        .map_err(|e| LintgateError::Staging(format!("failed to keep temp file: {}", e)))?;

    log::debug!("staged '{}' at '{}'", original_path, path.display());
    Ok(StagedFile { path })
}
