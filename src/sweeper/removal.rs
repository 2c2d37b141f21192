//! Ordered removal of discovered artifacts, with dry-run support.
//!
//! The first failed removal aborts the loop and propagates. Files earlier in
//! the plan stay deleted; a later rerun rediscovers only what remains, so the
//! sweep is idempotent across interruptions.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::errors::{Result, SweepError};

/// The ordered list of files a sweep intends to remove.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    files: Vec<PathBuf>,
}

impl SweepPlan {
    #[must_use]
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn first(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Summary of a completed sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// Number of files removed (or, in dry-run mode, that would be removed).
    pub files_removed: usize,
    /// Best-effort byte total of the removed files.
    pub bytes_freed: u64,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Remove every file in plan order.
///
/// In dry-run mode nothing is touched; the report counts what a real run
/// would have removed. A removal failure of any kind — permission denied, a
/// file that vanished since discovery — is fatal and aborts the remaining
/// iterations.
pub fn execute(plan: &SweepPlan, dry_run: bool) -> Result<SweepReport> {
    let mut bytes_freed: u64 = 0;

    for path in &plan.files {
        // Byte accounting is best-effort; a failed stat never blocks removal.
        if let Ok(meta) = fs::symlink_metadata(path) {
            bytes_freed = bytes_freed.saturating_add(meta.len());
        }
        if !dry_run {
            fs::remove_file(path).map_err(|e| SweepError::remove(path, e))?;
        }
    }

    Ok(SweepReport {
        files_removed: plan.files.len(),
        bytes_freed,
        dry_run,
    })
}
