//! Top-level CLI definition and dispatch.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::{Colorize, control};
use serde_json::{Value, json};
use thiserror::Error;

use fixture_sweeper::core::errors::SweepError;
use fixture_sweeper::core::paths::{default_project_root, instructions_dir};
use fixture_sweeper::sweeper::discovery::collect_artifacts;
use fixture_sweeper::sweeper::removal::{self, SweepPlan, SweepReport};

/// fixture-sweeper — removes generated `.o`/`.elf` artifacts from the
/// instruction fixtures tree.
#[derive(Debug, Parser)]
#[command(
    name = "fxs",
    author,
    version,
    about = "Fixture Sweeper - removes generated .o/.elf test artifacts",
    long_about = None
)]
pub struct Cli {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
    /// Project root override. Defaults to two levels above the binary.
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
    /// List candidates and report what would be removed, without deleting.
    #[arg(long)]
    pub dry_run: bool,
    /// Emit a single JSON report instead of human-readable output.
    #[arg(long)]
    pub json: bool,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// CLI failure classes with a stable exit-code contract.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input at runtime.
    #[error("{0}")]
    User(String),
    /// Discovery or removal failure.
    #[error(transparent)]
    Sweep(#[from] SweepError),
    /// JSON serialization failed.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// Output or prompt IO failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Sweep(_) | Self::Io(_) => 2,
            Self::Json(_) => 3,
        }
    }
}

/// Run one sweep: discover, gate, remove, report.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color {
        control::set_override(false);
    }
    if cli.json && !(cli.yes || cli.dry_run) {
        return Err(CliError::User(
            "--json cannot prompt for confirmation; pass --yes or --dry-run".to_string(),
        ));
    }

    let root = match &cli.root {
        Some(root) => root.clone(),
        None => default_project_root()?,
    };
    let target = instructions_dir(&root);
    let plan = SweepPlan::new(collect_artifacts(&target)?);

    if plan.is_empty() {
        if cli.json {
            let empty = SweepReport {
                files_removed: 0,
                bytes_freed: 0,
                dry_run: cli.dry_run,
            };
            return emit_json_report(&target, &empty);
        }
        println!("nothing to remove");
        return Ok(());
    }

    if !cli.yes && !cli.dry_run && !confirm(&plan)? {
        println!("cancelled");
        return Ok(());
    }

    if cli.dry_run && !cli.json {
        print_plan(&plan);
    }

    let report = removal::execute(&plan, cli.dry_run)?;

    if cli.json {
        emit_json_report(&target, &report)
    } else if report.dry_run {
        println!("would remove {} files", report.files_removed);
        Ok(())
    } else {
        println!("removed {} files", report.files_removed);
        Ok(())
    }
}

/// Interactive confirmation gate: names the first candidate and the count of
/// remaining files, reads one stdin line, accepts only `y` in any case.
fn confirm(plan: &SweepPlan) -> Result<bool, CliError> {
    let Some(first) = plan.first() else {
        return Ok(false);
    };
    print!(
        "Delete {} and {} others? [y/N]: ",
        first.display(),
        plan.len() - 1
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(is_affirmative(&line))
}

/// Strip the line terminator only before comparing: `" y"` is a refusal, the
/// same way the `[y/N]` convention reads everywhere else. EOF arrives as an
/// empty line and refuses.
fn is_affirmative(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y")
}

/// Numbered listing of what a dry run would remove.
fn print_plan(plan: &SweepPlan) {
    for (i, path) in plan.files().iter().enumerate() {
        println!("  {:>3}. {}", i + 1, path.display().to_string().dimmed());
    }
}

fn emit_json_report(target: &Path, report: &SweepReport) -> Result<(), CliError> {
    let mut payload = serde_json::to_value(report)?;
    payload["command"] = json!("sweep");
    payload["target"] = json!(target.display().to_string());
    write_json_line(&payload)
}

fn write_json_line(payload: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, payload)?;
    writeln!(stdout)?;
    Ok(())
}
