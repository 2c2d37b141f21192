//! Project-root derivation and fixtures-path resolution.

use std::env;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SweepError};

/// Path, relative to the project root, under which generated artifacts
/// accumulate.
pub const INSTRUCTIONS_SUBDIR: [&str; 3] = ["tests", "fixtures", "instructions"];

/// Derive the default project root: two directory levels above the running
/// binary's own location.
///
/// This mirrors how a script anchored in `scripts/` finds its repository
/// root. A compiled binary's install location is a weaker anchor, so the CLI
/// exposes `--root` to override this.
pub fn default_project_root() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| SweepError::RootResolve {
        details: e.to_string(),
    })?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| SweepError::RootResolve {
            details: format!("{} has no grandparent directory", exe.display()),
        })
}

/// Join the fixed fixtures subdirectory onto a project root.
pub fn instructions_dir(project_root: &Path) -> PathBuf {
    INSTRUCTIONS_SUBDIR
        .iter()
        .fold(project_root.to_path_buf(), |path, seg| path.join(seg))
}
