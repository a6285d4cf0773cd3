// src/catalog/scanner.rs

//! Recursive directory scan for `.exe` files.
//!
//! The scan is single-threaded and depth-first, and it never aborts: every
//! per-path failure is collected as a [`ScanError`] and the walk moves on.
//! A directory that cannot be listed contributes one error and nothing from
//! its subtree; a file that cannot be opened contributes one error and no
//! catalog entry. Errors from every sibling subtree are accumulated, in
//! traversal order.

use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::catalog::Catalog;

/// Extension a file must carry, exactly and case-sensitively, to be
/// catalogued.
const EXE_EXTENSION: &str = "exe";

/// A non-fatal per-path failure collected during a scan.
#[derive(Debug)]
pub struct ScanError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result of a scan: the (possibly partial) catalog plus every per-path
/// failure encountered along the way. Callers decide whether any error is
/// fatal to their workflow.
#[derive(Debug)]
pub struct ScanOutcome {
    pub catalog: Catalog,
    pub errors: Vec<ScanError>,
}

/// Recursively scan `dir` for `.exe` files.
///
/// Ordinals are assigned once, after the whole traversal, in the order
/// entries were appended; directory enumeration order governs that, no
/// sorting is applied.
pub fn scan_dir(dir: impl AsRef<Path>) -> ScanOutcome {
    let dir = dir.as_ref();
    let mut pairs = Vec::new();
    let mut errors = Vec::new();

    walk(dir, &mut pairs, &mut errors);

    debug!(
        dir = ?dir,
        entries = pairs.len(),
        errors = errors.len(),
        "scan finished"
    );

    ScanOutcome {
        catalog: Catalog::from_pairs(pairs),
        errors,
    }
}

fn walk(dir: &Path, pairs: &mut Vec<(String, String)>, errors: &mut Vec<ScanError>) {
    trace!(dir = ?dir, "entering directory");

    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(err) => {
            errors.push(ScanError {
                path: dir.to_path_buf(),
                source: err,
            });
            return;
        }
    };

    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                errors.push(ScanError {
                    path: dir.to_path_buf(),
                    source: err,
                });
                continue;
            }
        };

        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                errors.push(ScanError { path, source: err });
                continue;
            }
        };

        if file_type.is_dir() {
            walk(&path, pairs, errors);
            continue;
        }

        if path.extension() != Some(OsStr::new(EXE_EXTENSION)) {
            continue;
        }

        // Accessibility probe: open read-only and drop the handle right
        // away. Unreadable files are recorded, not catalogued.
        match File::open(&path) {
            Ok(file) => drop(file),
            Err(err) => {
                errors.push(ScanError { path, source: err });
                continue;
            }
        }

        let name = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        trace!(name = %name, path = ?path, "catalogued executable");
        pairs.push((name, path.to_string_lossy().into_owned()));
    }
}
