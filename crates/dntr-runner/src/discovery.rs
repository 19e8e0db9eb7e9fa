//! Candidate file discovery

use crate::{RunnerError, RunnerResult};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every `.cs` file under `root`, recursively, in sorted order.
///
/// Sorting makes runs deterministic regardless of directory iteration order.
pub fn find_candidate_files(root: &Path) -> RunnerResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(RunnerError::BadTestRoot(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension() == Some(OsStr::new("cs")))
        .collect();
    files.sort();
    Ok(files)
}
