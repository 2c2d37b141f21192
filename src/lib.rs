#![forbid(unsafe_code)]

//! fixture-sweeper (fxs) — removes generated build artifacts from the
//! instruction test-fixtures tree.
//!
//! A sweep runs in three steps:
//! 1. **Discovery** — recursive two-pass collection of `.o` / `.elf` files
//! 2. **Confirmation** — interactive `[y/N]` gate unless `-y` is given
//! 3. **Removal** — ordered delete loop; the first failure is fatal
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use fixture_sweeper::prelude::*;
//! ```

pub mod prelude;

pub mod core;
pub mod sweeper;
