use crate::error::{EngineError, Result};
use crate::fixer;
use crate::stats::{FileOutcome, FileStatus};
use std::fs;
use std::path::Path;

/// Read one file, fix it, and rewrite it in place when the text changed.
///
/// The comparison is byte-for-byte; an unchanged file is never reopened for
/// writing, so its content and mtime stay untouched.
///
/// # Errors
/// Read failures (including non-UTF-8 content) and write failures abort the
/// run; there is no skip-and-continue.
pub fn process_file(path: &Path) -> Result<FileOutcome> {
    let original = fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fixed = fixer::fix_content(&original);
    if fixed == original {
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
        });
    }

    log::debug!("rewriting {}", path.display());
    fs::write(path, &fixed).map_err(|e| EngineError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(FileOutcome {
        path: path.to_path_buf(),
        status: FileStatus::Fixed,
    })
}
