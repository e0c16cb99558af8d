use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Routes used throughout the tests
pub const TOWNS: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

/// Get a Command for trains, isolated from any user or project config
pub fn trains(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("trains");
    cmd.current_dir(cwd)
        .env("TRAINS_CONFIG_DIR", cwd.join(".no-global-config"))
        .env_remove("TRAINS_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("TRAINS_LOG");
    cmd
}

/// trains with the standard routes passed inline
pub fn trains_with_towns(cwd: &Path) -> Command {
    let mut cmd = trains(cwd);
    cmd.args(["--routes", TOWNS]);
    cmd
}
