//! Tests for failure handling and exit codes.

use crate::support::*;

#[test]
fn test_missing_hostname_is_usage_error() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert!(!t.dir.path().join(".env").exists());
}

#[test]
fn test_huge_jwt_expiry_is_usage_error() {
    let t = Test::new();

    let output = t.run_with(HOSTNAME, &["--no-hosts", "--jwt-expiry", "9223372036854775807"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert_stderr_contains(&output, "--jwt-expiry");
    assert!(!t.dir.path().join(".env").exists());
}

#[test]
fn test_missing_output_dir_fails() {
    let t = Test::new();

    let output = t.run_with(HOSTNAME, &["--output-dir", "does-not-exist"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "failed to write");

    assert_eq!(
        std::fs::read_to_string(t.hosts_path()).unwrap(),
        SAMPLE_HOSTS
    );
}

#[test]
fn test_missing_hosts_file_keeps_env_files() {
    let t = Test::new();
    let missing = t.dir.path().join("etc").join("hosts");

    let output = t
        .cmd()
        .arg(HOSTNAME)
        .env("ENVSEED_HOSTS_FILE", &missing)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "hosts file");

    assert!(t.dir.path().join(".env").exists());
    assert!(t.dir.path().join("frontend.env").exists());
    assert!(t.dir.path().join("backend.env").exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_hosts_file_suggests_no_hosts() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    std::fs::set_permissions(t.hosts_path(), std::fs::Permissions::from_mode(0o444)).unwrap();

    // root ignores file modes
    if std::fs::OpenOptions::new()
        .append(true)
        .open(t.hosts_path())
        .is_ok()
    {
        eprintln!("SKIPPED: running with permission override");
        return;
    }

    let output = t.run(HOSTNAME);
    assert_failure(&output);
    assert_stderr_contains(&output, "--no-hosts");
}

#[test]
fn test_help_mentions_hostname() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("HOSTNAME"))
        .stdout(predicate::str::contains("--no-hosts"));
}
