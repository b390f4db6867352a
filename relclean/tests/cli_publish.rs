//! CLI tests for `relclean publish` and `relclean ship`.
//!
//! Spawns the relclean binary with the publish tool swapped out via config
//! for `true`/`false`, so tests exercise the real subprocess path without a
//! toolchain on PATH.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use relclean::exit_codes;

fn relclean(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relclean"));
    cmd.env_remove("CI").arg("--config").arg(config);
    cmd
}

fn touch(path: &Path) {
    fs::write(path, b"").expect("write file");
}

/// Write a config whose publish command is `tool` (which must accept and
/// ignore arbitrary arguments, like `true` and `false` do).
fn write_config(dir: &Path, tool: &str) -> PathBuf {
    let path = dir.join("relclean.toml");
    let contents = format!("[publish]\ncommand = [\"{tool}\"]\ntimeout_secs = 30\n");
    fs::write(&path, contents).expect("write config");
    path
}

fn populated_out_dir(root: &Path) -> PathBuf {
    let out_dir = root.join("out");
    fs::create_dir(&out_dir).expect("mkdir");
    touch(&out_dir.join("app.dll"));
    touch(&out_dir.join("app.dev.json"));
    touch(&out_dir.join("app.deps.json"));
    out_dir
}

#[test]
fn publish_release_scrubs_only_dev_configs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), "true");
    let out_dir = populated_out_dir(temp.path());

    let status = relclean(&config)
        .arg("publish")
        .arg("Release")
        .arg("Server.csproj")
        .arg(&out_dir)
        .status()
        .expect("relclean publish");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(out_dir.join("app.dll").is_file());
    assert!(out_dir.join("app.deps.json").is_file());
    assert!(!out_dir.join("app.dev.json").exists());
}

#[test]
fn publish_debug_is_a_noop_even_with_failing_tool() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), "false");
    let out_dir = populated_out_dir(temp.path());

    let status = relclean(&config)
        .arg("publish")
        .arg("Debug")
        .arg("Server.csproj")
        .arg(&out_dir)
        .status()
        .expect("relclean publish");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(out_dir.join("app.dev.json").is_file());
}

#[test]
fn publish_failure_fails_and_skips_cleanup() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = write_config(temp.path(), "false");
    let out_dir = populated_out_dir(temp.path());

    let status = relclean(&config)
        .arg("publish")
        .arg("Release")
        .arg("Server.csproj")
        .arg(&out_dir)
        .status()
        .expect("relclean publish");

    assert_eq!(status.code(), Some(exit_codes::FAILURE));
    assert!(out_dir.join("app.dev.json").is_file());
}

#[test]
fn ship_publishes_to_configured_path_and_scrubs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("relclean.toml");
    fs::write(
        &config_path,
        "ship_output_dir = \"bin\"\n[publish]\ncommand = [\"true\"]\n",
    )
    .expect("write config");
    let bin = temp.path().join("bin");
    fs::create_dir(&bin).expect("mkdir");
    touch(&bin.join("server.dll"));
    touch(&bin.join("server.dev.json"));

    let status = relclean(&config_path)
        .current_dir(temp.path())
        .arg("ship")
        .status()
        .expect("relclean ship");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(bin.join("server.dll").is_file());
    assert!(!bin.join("server.dev.json").exists());
}
