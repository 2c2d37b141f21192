use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_fxs") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "fxs.exe" } else { "fxs" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve fxs binary path for integration test"),
    }
}

pub fn run_cli_case(case_name: &str, args: &[&str]) -> CmdResult {
    run_cli_case_with_input(case_name, args, None)
}

/// Run the binary with optional piped stdin (for confirmation-prompt cases).
/// Stdout/stderr are captured and also written to a per-case log file under
/// the system temp dir so a failing assertion can point at the full output.
pub fn run_cli_case_with_input(case_name: &str, args: &[&str], input: Option<&str>) -> CmdResult {
    let root = std::env::temp_dir().join("fxs-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let log_path = root.join(format!("{}-{}.log", sanitize(case_name), now_millis()));
    let bin_path = resolve_bin_path();

    let mut child = Command::new(&bin_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env("RUST_BACKTRACE", "1")
        .spawn()
        .expect("spawn fxs command");

    if let Some(text) = input {
        child
            .stdin
            .as_mut()
            .expect("child stdin handle")
            .write_all(text.as_bytes())
            .expect("write stdin to fxs");
    }
    // Dropping the handle closes stdin; a prompt read past the input sees EOF.
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("await fxs command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log = format!(
        "case: {case_name}\nargs: {args:?}\nstdin: {input:?}\nstatus: {:?}\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}\n",
        output.status,
    );
    fs::write(&log_path, log).expect("write case log");

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}

/// Create files under `<root>/tests/fixtures/instructions/<rel>` for each
/// relative path given, creating intermediate directories as needed.
pub fn seed_fixture_tree(root: &Path, rel_paths: &[&str]) -> PathBuf {
    let dir = root.join("tests").join("fixtures").join("instructions");
    for rel in rel_paths {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().expect("fixture parent")).expect("create fixture dirs");
        fs::write(&path, rel.as_bytes()).expect("write fixture file");
    }
    dir
}
