#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn toolbelt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("toolbelt").unwrap();
    cmd.env_remove("TOOLBELT_HOME");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running with `home` as both TOOLBELT_HOME and working directory
pub fn toolbelt_in(home: &Path) -> Command {
    let mut cmd = toolbelt_cmd();
    cmd.env("TOOLBELT_HOME", home).current_dir(home);
    cmd
}
