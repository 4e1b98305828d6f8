//! Recursive discovery of log files under a root directory.

use crate::constants::LOG_FILE_MARKER;
use crate::error::{Error, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every regular file below `root` whose name contains `.txt`.
///
/// The match is a substring test, so `run.txt.bak` is included. Results are
/// ordered by plain lexicographic order of the file name (`c10.txt` sorts
/// before `c2.txt`); identical names in different directories fall back to
/// the full path.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `root` is not a directory.
pub fn discover_log_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let mut files: Vec<(String, PathBuf)> = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Symlinks are not followed, but a link to a regular file is still a log
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(LOG_FILE_MARKER) {
            files.push((name, entry.into_path()));
        }
    }

    files.sort();
    debug!("Discovered {} log file(s) under {}", files.len(), root.display());

    Ok(files.into_iter().map(|(_, path)| path).collect())
}
