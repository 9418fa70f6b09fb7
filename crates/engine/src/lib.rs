// crates/engine/src/lib.rs
//! logfix engine: walks a source tree and completes the commenting-out of
//! multi-line log calls whose opening line was already commented.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod fixer;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::{FileOutcome, RunResult};

/// Run the fixer over every matching file under the configured root.
///
/// Files are processed strictly one after another; `on_file` receives each
/// outcome as soon as the file has been handled, so callers can report
/// progress while the run is still going.
///
/// # Errors
///
/// Aborts on the first walk, read or write error. Files handled before the
/// failure keep their rewritten content.
pub fn run<F>(config: &Config, mut on_file: F) -> Result<RunResult>
where
    F: FnMut(&FileOutcome),
{
    let files = filesystem::collect_files(config)?;
    log::debug!(
        "{} candidate files under {}",
        files.len(),
        config.root.display()
    );

    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let outcome = processor::process_file(&path)?;
        on_file(&outcome);
        outcomes.push(outcome);
    }

    Ok(RunResult { outcomes })
}
