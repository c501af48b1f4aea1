#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub const FAKE_PYTHON: &str = "fake-python";

pub const DELIMITER: &str = if cfg!(windows) { ";" } else { ":" };

/// A `pyboot` command isolated from the caller's environment.
pub fn pyboot() -> Command {
    let mut cmd = cargo_bin_cmd!("pyboot");
    cmd.env_clear()
        .env("PYBOOT_NO_PAUSE", "1")
        .env("NO_COLOR", "1")
        .arg("--executable")
        .arg(FAKE_PYTHON);
    if let Some(root) = std::env::var_os("SystemRoot") {
        cmd.env("SystemRoot", root);
    }
    cmd
}

pub fn path_list(dirs: &[&Path]) -> String {
    dirs.iter()
        .map(|dir| dir.display().to_string())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

pub fn write_fake_python(dir: &Path, body: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create interpreter dir");
    let path = dir.join(FAKE_PYTHON);
    fs::write(&path, body).expect("write fake interpreter");
    path
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("chmod");
}

pub fn stdout_of(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}
