//! Workbook discovery inside a metadata folder

use crate::config::SourceConfig;
use crate::error::{DictError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Find the dictionary workbook in `folder` (non-recursive).
///
/// With `file_name` configured only that exact file is accepted. Otherwise the
/// first regular file (by name) carrying the configured extension is used.
pub fn find_workbook(folder: &Path, source: &SourceConfig) -> Result<PathBuf> {
    let not_found = || DictError::NoFileFound {
        folder: folder.to_path_buf(),
    };

    if let Some(file_name) = &source.file_name {
        let candidate = folder.join(file_name);
        return if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(not_found())
        };
    }

    let entries = fs::read_dir(folder).map_err(|_| not_found())?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| !is_hidden(path))
        .filter(|path| {
            path.extension().and_then(|s| s.to_str()) == Some(source.extension.as_str())
        })
        .collect();
    matches.sort();

    if matches.len() > 1 {
        tracing::debug!(
            "{} workbooks found in {}, using the first",
            matches.len(),
            folder.display()
        );
    }

    matches.into_iter().next().ok_or_else(not_found)
}

/// Dotfiles never match a glob like `*.xlsx`
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
