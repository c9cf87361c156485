use assert_cmd::Command;
use predicates::str::contains;

/// Binary with every credential stripped from the child environment, so the
/// no-credential paths are exercised regardless of the host setup.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("license-scout").unwrap();
    cmd.env_remove("LIBRARIES_IO_API_KEY")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GOOGLE_API_KEY");
    cmd
}

#[test]
fn lookup_without_key_prints_unknown() {
    cmd()
        .args(["-q", "lookup", "org.apache.commons", "commons-lang3", "3.12.0"])
        .assert()
        .success()
        .stdout(contains("Unknown"));
}

#[test]
fn lookup_without_key_fails_policy_check() {
    cmd()
        .args(["-q", "lookup", "org.example", "widget", "1.0.0", "--check-policy"])
        .assert()
        .code(1);
}

#[test]
fn repo_search_without_token_reports_not_configured() {
    cmd()
        .args(["repo-search", "acme-widgets"])
        .assert()
        .success()
        .stdout(contains("GitHub token not configured"));
}

#[test]
fn audit_without_key_reports_not_configured() {
    cmd()
        .args(["audit"])
        .write_stdin("MIT License\n\nPermission is hereby granted...")
        .assert()
        .success()
        .stdout(contains("Could not analyze"));
}

#[test]
fn fetch_url_with_empty_url_prints_nothing() {
    cmd()
        .args(["fetch-url", ""])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn capabilities_lists_all_tools() {
    cmd()
        .arg("capabilities")
        .assert()
        .success()
        .stdout(contains("libraries_io_license"))
        .stdout(contains("lookup_license_text"))
        .stdout(contains("fetch_repo_license"))
        .stdout(contains("search_license_issues"))
        .stdout(contains("analyze_license_text"));
}
