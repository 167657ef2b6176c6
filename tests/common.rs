#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsh() -> Command {
    cargo_bin_cmd!("rstaffhours")
}

/// `rstaffhours --data <data> --test`, ready for a subcommand.
pub fn rsh_data(data: &str) -> Command {
    let mut cmd = rsh();
    cmd.args(["--data", data, "--test"]);
    cmd
}

/// Create a unique employees file path inside the system temp dir and remove
/// any leftover data or activity log from a previous run
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstaffhours.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the employees file and add two employees with some hours
pub fn init_with_staff(data: &str) {
    rsh_data(data).arg("init").assert().success();

    rsh_data(data)
        .args([
            "add",
            "Alice",
            "--position",
            "Developer",
            "--salary",
            "100000",
            "--project",
            "Company website",
        ])
        .assert()
        .success();

    rsh_data(data)
        .args(["add", "Bob", "--position", "QA", "--salary", "50000"])
        .assert()
        .success();

    rsh_data(data).args(["hours", "Alice", "160"]).assert().success();
    rsh_data(data).args(["hours", "2", "80"]).assert().success();
}
