//! Stale file cleanup for `pylaunch clean`
//!
//! Removes leftovers of interrupted test runs (`test_*.db`, WAL/SHM files,
//! rollback journals) from the application root and checks that the main
//! database can still be opened for writing.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{LauncherError, Result, config as config_error, fs as fs_error};

/// State of the main database file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseState {
    /// Not created yet; the application creates it on first start
    Missing,
    Accessible { size: u64 },
    Locked { reason: String },
}

#[derive(Debug, Default)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    /// `FileRemoveFailed` for every file that could not be removed
    pub failed: Vec<LauncherError>,
}

/// Files directly under `root` whose names match any of `patterns`
pub fn find_stale_files(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let globs = patterns
        .iter()
        .map(|p| {
            Glob::new(p).map_err(|e| config_error::bad_stale_pattern(p, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut matches = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let candidate = CandidatePath::from(&*name);
        if globs.iter().any(|g| g.matched(&candidate).is_some()) {
            matches.push(entry.into_path());
        }
    }

    debug!(count = matches.len(), "stale files found");
    Ok(matches)
}

/// Remove stale files; files that cannot be removed are collected, not fatal
pub fn remove_files(files: Vec<PathBuf>) -> CleanupReport {
    let mut report = CleanupReport::default();
    for path in files {
        match fs::remove_file(&path) {
            Ok(()) => report.removed.push(path),
            Err(e) => {
                let err = fs_error::remove_failed(path.display().to_string(), e.to_string());
                warn!("{err}");
                report.failed.push(err);
            }
        }
    }
    report
}

/// Check whether the database can be opened for reading and writing
pub fn check_database(path: &Path) -> DatabaseState {
    match fs::OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => DatabaseState::Accessible {
            size: file.metadata().map(|m| m.len()).unwrap_or(0),
        },
        Err(e) if e.kind() == ErrorKind::NotFound => DatabaseState::Missing,
        Err(e) => DatabaseState::Locked {
            reason: e.to_string(),
        },
    }
}
