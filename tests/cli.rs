// ABOUTME: Integration tests for the republish CLI commands.
// ABOUTME: Validates --help output, init, plan trace lines, and run against a scripted engine.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn republish_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("republish"));
    cmd.env_clear();
    cmd
}

#[test]
fn help_shows_commands() {
    republish_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("republish.yml");

    republish_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "republish.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("pull:"), "Config should have pull section");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("republish.yml"), "tags: []").unwrap();

    republish_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn plan_prints_trace_lines() {
    let temp_dir = tempfile::tempdir().unwrap();

    republish_cmd()
        .current_dir(temp_dir.path())
        .args([
            "plan",
            "--repo",
            "acct/img",
            "--digest",
            "sha256:abc",
            "--tags",
            "v1,v2",
            "--registry",
            "registry.example.com",
            "--daemon-off",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest mode enabled"))
        .stdout(predicate::str::contains("+ docker pull acct/img@sha256:abc"))
        .stdout(predicate::str::contains(
            "+ docker push registry.example.com/acct/img:v2",
        ))
        .stdout(predicate::str::contains("dockerd").not());
}

#[test]
fn plan_reads_config_from_env_and_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("republish.yml"),
        "pull:\n  repo: acct/img\n  sha: sha256:abc\ntags: [v1]\n",
    )
    .unwrap();

    republish_cmd()
        .current_dir(temp_dir.path())
        .env("PLUGIN_DRY_RUN", "true")
        .env("PLUGIN_PASSWORD", "hunter2")
        .env("PLUGIN_USERNAME", "deploy")
        .env("PLUGIN_REGISTRY", "registry.example.com")
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "+ docker login -u deploy --password-stdin registry.example.com",
        ))
        .stdout(predicate::str::contains("+ dockerd --data-root /var/lib/docker"))
        .stdout(predicate::str::contains("+ docker tag"))
        .stdout(predicate::str::contains("push").not())
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn plan_without_repo_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    republish_cmd()
        .current_dir(temp_dir.path())
        .args(["plan", "--digest", "sha256:abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("source repository is required"));
}

#[test]
fn quiet_plan_suppresses_notices() {
    let temp_dir = tempfile::tempdir().unwrap();

    republish_cmd()
        .current_dir(temp_dir.path())
        .args([
            "--quiet",
            "plan",
            "--repo",
            "acct/img",
            "--digest",
            "sha256:abc",
            "--daemon-off",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guest mode").not())
        .stdout(predicate::str::contains("+ docker version"));
}

/// Stand-in engine: echoes its arguments, fails the cache pull, and fails
/// `push` with status 7 when FAILPUSH is set.
const FAKE_ENGINE: &str = r#"#!/bin/sh
echo "ran: $*"
case "$1" in
  pull) [ "$2" = "acct/img:cache" ] && exit 1 ;;
  push) [ -n "$FAILPUSH" ] && exit 7 ;;
esac
exit 0
"#;

fn scripted_engine(dir: &Path) -> PathBuf {
    let engine = dir.join("fake-docker");
    fs::write(&engine, FAKE_ENGINE).unwrap();
    fs::set_permissions(&engine, fs::Permissions::from_mode(0o755)).unwrap();

    let config = format!(
        "pull:\n  repo: acct/img\n  sha: sha256:abc\nengine:\n  program: {}\n\
         daemon:\n  disabled: true\ncache_from:\n  - acct/img:cache\n\
         readiness:\n  attempts: 1\n  interval: 10ms\n",
        engine.display()
    );
    fs::write(dir.join("republish.yml"), config).unwrap();
    engine
}

#[test]
fn run_traces_each_command_before_its_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let engine = scripted_engine(temp_dir.path()).display().to_string();

    let expected = format!(
        "+ {engine} pull acct/img:cache\n\
         ran: pull acct/img:cache\n\
         Could not pull cache-from image acct/img:cache. Ignoring...\n\
         + {engine} pull acct/img@sha256:abc\n\
         ran: pull acct/img@sha256:abc\n"
    );

    republish_cmd()
        .current_dir(temp_dir.path())
        .args(["run", "--tags", "v1,v2", "--registry", "registry.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected))
        .stdout(predicate::str::contains(format!(
            "+ {engine} push registry.example.com/acct/img:v2\nran: push registry.example.com/acct/img:v2"
        )))
        .stderr(predicate::str::contains(
            "Warning: cache-from image acct/img:cache not pulled",
        ));
}

#[test]
fn run_stops_at_first_failed_push() {
    let temp_dir = tempfile::tempdir().unwrap();
    scripted_engine(temp_dir.path());

    republish_cmd()
        .current_dir(temp_dir.path())
        .env("FAILPUSH", "1")
        .args(["run", "--tags", "v1,v2", "--registry", "registry.example.com"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ran: push registry.example.com/acct/img:v1"))
        .stdout(predicate::str::contains("acct/img:v2").not())
        .stderr(predicate::str::contains("Error: "))
        .stderr(predicate::str::contains("fake-docker exited with status 7"));
}

#[test]
fn quiet_run_keeps_cache_pull_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    scripted_engine(temp_dir.path());

    republish_cmd()
        .current_dir(temp_dir.path())
        .args(["--quiet", "run", "--tags", "v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Could not pull cache-from image acct/img:cache. Ignoring...",
        ))
        .stdout(predicate::str::contains("Guest mode").not());
}
