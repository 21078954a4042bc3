//! End-to-end tests for the thanks binary.
//!
//! These scenarios never reach the network: the missing-token gate and the
//! missing-project error both fire before any GitHub call, which is exactly
//! the behavior under test.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A thanks command isolated from the developer's real environment:
/// no GITHUB_TOKEN, global config pointed into an empty temp directory.
fn thanks_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("thanks").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("GITHUB_TOKEN")
        .env("THANKS_CONFIG", dir.path().join("config.toml"))
        .arg("--quiet");
    cmd
}

/// Missing token: diagnostic on stdout, successful exit, nothing else done.
#[test]
fn missing_token_ends_the_run_successfully() {
    let dir = TempDir::new().unwrap();

    thanks_command(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No GitHub token found"));
}

/// The token gate runs before the project is touched, so no pom.xml is
/// needed for the missing-token diagnostic.
#[test]
fn missing_token_is_reported_before_project_validation() {
    let dir = TempDir::new().unwrap();
    // Deliberately no pom.xml in the directory

    thanks_command(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No GitHub token found"));
}

/// With a token but no pom.xml, the run fails with a friendly message.
#[test]
fn missing_project_descriptor_fails() {
    let dir = TempDir::new().unwrap();

    thanks_command(&dir)
        .arg("--token")
        .arg("ghp_dummy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("project descriptor not found"))
        .stderr(predicate::str::contains("pom.xml"));
}

/// A token from the global config file passes the gate too.
#[test]
fn token_from_config_file_passes_the_gate() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "github_token = \"ghp_dummy\"\n").unwrap();

    // No pom.xml: the run gets past the token gate and fails on the project
    thanks_command(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("project descriptor not found"));
}

/// A project whose dependency list yields no GitHub repositories reports
/// "none found" and exits successfully without starring anything. The mvn
/// on PATH is a stub script, so the scan genuinely runs and comes up empty.
#[cfg(unix)]
#[test]
fn empty_repository_set_reports_none_found() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("pom.xml"),
        "<project><modelVersion>4.0.0</modelVersion>\
         <groupId>com.example</groupId><artifactId>empty</artifactId>\
         <version>1.0.0</version></project>",
    )
    .unwrap();

    // Stub mvn: a dependency:list run that resolves nothing
    let bin_dir = dir.path().join("bin");
    std::fs::create_dir(&bin_dir).unwrap();
    let stub = bin_dir.join("mvn");
    std::fs::write(&stub, "#!/bin/sh\necho \"[INFO] BUILD SUCCESS\"\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();
    let path = format!(
        "{}:{}",
        bin_dir.display(),
        std::env::var("PATH").unwrap_or_default()
    );

    thanks_command(&dir)
        .env("PATH", path)
        .arg("--token")
        .arg("ghp_dummy")
        .arg("--local-repo")
        .arg(dir.path().join("repository"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No GitHub repositories found in dependencies"))
        .stdout(predicate::str::contains("Starring").not());
}

#[test]
fn help_describes_the_tool() {
    let dir = TempDir::new().unwrap();

    thanks_command(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub star"))
        .stdout(predicate::str::contains("--direct"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("thanks").unwrap();
    cmd.current_dir(dir.path())
        .args(["--verbose", "--quiet"])
        .assert()
        .failure();
}
