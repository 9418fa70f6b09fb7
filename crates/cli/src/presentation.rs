// crates/cli/src/presentation.rs
use logfix_engine::stats::{FileOutcome, FileStatus, RunResult};

/// Status line for one visited file.
pub fn print_outcome(outcome: &FileOutcome) {
    let marker = match outcome.status {
        FileStatus::Fixed => "fixed    ",
        FileStatus::Unchanged => "unchanged",
    };
    println!("{marker}  {}", outcome.path.display());
}

/// Completion notice once the walk is done.
pub fn print_summary(result: &RunResult) {
    println!();
    println!(
        "logfix v{}: {} files scanned, {} fixed",
        crate::VERSION,
        result.scanned(),
        result.fixed()
    );
}
