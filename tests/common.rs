#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn taudit() -> Command {
    Command::cargo_bin("taudit").unwrap()
}

/// Create a unique test config path inside the system temp dir and remove any
/// existing file, so every test starts from defaults.
pub fn setup_test_cfg(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taudit.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Stdin lines for one pass through the `add` form.
/// Field order: date, start, end, parent category, sub-category, description.
pub fn add_lines(
    date: &str,
    start: &str,
    end: &str,
    parent: &str,
    sub: &str,
    description: &str,
) -> String {
    format!("add\n{date}\n{start}\n{end}\n{parent}\n{sub}\n{description}\n")
}

/// A session command that runs `script` against a fresh config.
pub fn session_cmd(cfg_path: &str, script: &str) -> Command {
    let mut cmd = taudit();
    cmd.args(["--config", cfg_path, "session"])
        .write_stdin(format!("{script}quit\n"));
    cmd
}
