//! Artifact discovery: synchronous recursive collection of `.o`/`.elf` files.
//!
//! The walk makes one full pass per extension, so every `.o` match precedes
//! every `.elf` match. Within a pass the order is directory-traversal order,
//! which is not guaranteed sorted.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SweepError};

/// Extensions that identify a generated artifact. Matching is case-sensitive.
pub const ARTIFACT_EXTENSIONS: [&str; 2] = ["o", "elf"];

/// Collect every artifact file under `root`, at arbitrary depth.
///
/// A missing (or unreadable) root yields an empty list, matching
/// glob-against-nonexistent-directory semantics. Unreadable subdirectories
/// deeper in the tree are skipped silently. Discovery never mutates the
/// tree, so calling this twice without deleting in between returns the
/// same list.
pub fn collect_artifacts(root: &Path) -> Result<Vec<PathBuf>> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        // A file where the directory should be matches nothing.
        Ok(_) => return Ok(Vec::new()),
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
            return Ok(Vec::new());
        }
        Err(err) => return Err(SweepError::list(root, err)),
    }

    let mut files = Vec::new();
    for ext in ARTIFACT_EXTENSIONS {
        collect_with_extension(root, OsStr::new(ext), &mut files);
    }
    Ok(files)
}

/// Depth-first pass appending every non-directory entry under `dir` whose
/// extension equals `ext` exactly.
fn collect_with_extension(dir: &Path, ext: &OsStr, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return; // Unreadable directory: skip, as a glob would.
    };

    for entry in entries.flatten() {
        let Ok(ft) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        // Symlinked directories are not followed; a symlink whose name
        // matches the extension is still a candidate, like any other
        // non-directory entry.
        if ft.is_dir() {
            collect_with_extension(&path, ext, out);
        } else if path.extension() == Some(ext) {
            out.push(path);
        }
    }
}
