use crate::config::Config;
use crate::error::Result;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Serial recursive walk collecting every file with the target extension.
///
/// Nothing is excluded: hidden entries are kept and all ignore-file handling
/// is turned off, so dependency and vendor directories are visited too.
///
/// # Errors
/// Any traversal error aborts the collection.
pub fn collect_files(config: &Config) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(&config.root);
    builder
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext == config.extension)
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
