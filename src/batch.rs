//! Directory/file dispatch and the batch loop.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::ConvertConfig;
use crate::pipeline::convert_file;

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files successfully converted.
    pub converted: usize,
    /// Files attempted.
    pub total: usize,
}

/// Convert the configured input: one file, or every file in a directory.
///
/// Directory inputs are enumerated non-recursively (regular files only,
/// subdirectories skipped), sorted by name for reproducible processing
/// order, and converted one at a time. A file that fails is reported and
/// skipped; the batch always runs to completion. Directory runs end with a
/// `Converted X from Y` summary line; single-file runs produce none.
pub fn run(config: &ConvertConfig) -> BatchSummary {
    if config.input.is_dir() {
        let files = list_files(&config.input);
        let total = files.len();
        let mut converted = 0;
        for file in &files {
            match convert_file(file, config) {
                Ok(_) => converted += 1,
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        println!("Converted {converted} from {total}");
        BatchSummary { converted, total }
    } else {
        let converted = match convert_file(&config.input, config) {
            Ok(_) => 1,
            Err(e) => {
                eprintln!("Error: {e}");
                0
            }
        };
        BatchSummary {
            converted,
            total: 1,
        }
    }
}

/// Regular files directly inside `dir`, sorted by name.
///
/// Access failures (directory gone, permission denied) are reported and
/// yield an empty list, so the caller still gets a zero-conversion summary
/// instead of an abort.
fn list_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("Error: The directory '{}' was not found.", dir.display());
            return Vec::new();
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            eprintln!("Error: Permission denied to access '{}'.", dir.display());
            return Vec::new();
        }
        Err(e) => {
            eprintln!("Error: Cannot read directory '{}': {e}", dir.display());
            return Vec::new();
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(%e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    files
}
