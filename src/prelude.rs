//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use fixture_sweeper::prelude::*;
//! ```

// Core
pub use crate::core::errors::{Result, SweepError};
pub use crate::core::paths::{INSTRUCTIONS_SUBDIR, default_project_root, instructions_dir};

// Sweeper
pub use crate::sweeper::discovery::{ARTIFACT_EXTENSIONS, collect_artifacts};
pub use crate::sweeper::removal::{SweepPlan, SweepReport, execute};
