//! Integration tests for lhci-notify delivery
//!
//! Each test starts a one-shot local HTTP server standing in for Slack or the
//! GitHub API, then runs a real notifier (or the CLI) against it.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use server::MockServer;

const RESULTS: &str = r#"[
  {"url":"https://a.com","auditId":"x","auditProperty":"y","auditTitle":"Title",
   "operator":"<=","expected":100,"actual":150},
  {"url":"https://a.com","auditId":"first-contentful-paint","auditTitle":"First Contentful Paint",
   "operator":"<=","expected":2000,"actual":2600},
  {"url":"https://a.com","auditId":"categories","auditProperty":"performance","auditTitle":"Performance",
   "operator":">=","expected":0.9,"actual":0.71},
  {"url":"https://b.com","auditId":"interactive","auditTitle":"Time to Interactive",
   "operator":"<=","expected":3000,"actual":4100}
]"#;

/// Helper to create an lhci-notify command with a clean CI environment
fn lhci_notify() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("lhci-notify"));
    for var in [
        "LHCI_NOTIFY_TARGET",
        "LHCI_NOTIFY_CONFIG",
        "SLACK_WEBHOOK_URL",
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_SHA",
        "GITHUB_API_URL",
        "GITHUB_SERVER_URL",
        "GITHUB_RUN_ID",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper to lay out `.lighthouseci/assertion-results.json`
fn workspace_with_results(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".lighthouseci")).unwrap();
    fs::write(temp.path().join(".lighthouseci/assertion-results.json"), content).unwrap();
    temp
}

// =============================================================================
// END-TO-END CLI TESTS
// =============================================================================

#[test]
fn test_e2e_slack_notification() {
    let temp = workspace_with_results(RESULTS);
    let server = MockServer::respond_with(200, "ok");

    lhci_notify()
        .args(["notify", "--status", "1", "--target", "slack"])
        .env("SLACK_WEBHOOK_URL", server.url("/services/T/B/X"))
        .env("GITHUB_REPOSITORY", "acme/site")
        .env("GITHUB_SHA", "0123abc")
        .env("GITHUB_RUN_ID", "77")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 result(s) across 2 URL(s)"));

    let request = server.request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/services/T/B/X");

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let attachments = body["attachments"].as_array().unwrap();
    assert_eq!(attachments.len(), 4);
    assert_eq!(
        attachments[0]["title"],
        "Pull Request failure - https://github.com/acme/site/commit/0123abc"
    );
    assert_eq!(attachments[0]["pretext"], "Lighthouse CI assertion results for acme/site");
    assert_eq!(attachments[1]["text"], "3 result(s) for https://a.com");
    assert_eq!(attachments[1]["color"], "danger");
    assert_eq!(attachments[1]["fields"].as_array().unwrap().len(), 3);
    assert_eq!(attachments[1]["fields"][2]["title"], "…");
    assert_eq!(attachments[2]["text"], "1 result(s) for https://b.com");
    assert_eq!(attachments[3]["title"], "View Details");
    assert_eq!(attachments[3]["title_link"], "https://github.com/acme/site/actions/runs/77");
}

#[test]
fn test_e2e_slack_rejection_exits_with_delivery_code() {
    let temp = workspace_with_results(RESULTS);
    let server = MockServer::respond_with(404, "no_service");

    lhci_notify()
        .args(["notify", "--status", "0", "--target", "slack"])
        .env("SLACK_WEBHOOK_URL", server.url("/services/T/B/X"))
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Not delivered"))
        .stdout(predicate::str::contains("no_service"));

    server.request();
}

#[test]
fn test_e2e_github_check_run() {
    let temp = workspace_with_results(RESULTS);
    let server = MockServer::respond_with(201, "{\"id\": 1}");

    lhci_notify()
        .args(["--json", "notify", "--status", "0", "--target", "github-check"])
        .env("GITHUB_TOKEN", "ghs_test")
        .env("GITHUB_REPOSITORY", "acme/site")
        .env("GITHUB_SHA", "0123abc")
        .env("GITHUB_API_URL", server.url(""))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"delivered\": true"));

    let request = server.request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/repos/acme/site/check-runs");
    assert_eq!(request.header("authorization").as_deref(), Some("Bearer ghs_test"));
    assert_eq!(request.header("accept").as_deref(), Some("application/vnd.github+json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["name"], "Lighthouse CI Action");
    assert_eq!(body["head_sha"], "0123abc");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["conclusion"], "success");

    let summary = body["output"]["summary"].as_str().unwrap();
    assert!(summary.starts_with("## [Pull Request success](https://github.com/acme/site/commit/0123abc)"));
    assert!(summary.contains("### 3 result(s) for https://a.com"));
    assert!(summary.contains("Expected 100  less than  actual 150"));
    assert!(summary.contains("<summary>View more (1)</summary>"));
    assert!(summary.contains("Expected 0.9  greater than  actual 0.71"));
}

#[test]
fn test_e2e_config_file_selects_target() {
    let temp = workspace_with_results("[]");
    let server = MockServer::respond_with(200, "ok");
    fs::write(
        temp.path().join(".lhci-notify.toml"),
        format!(
            "target = \"slack\"\n\n[slack]\nwebhook_url = \"{}\"\npretext = \"Perf budget\"\n",
            server.url("/hook")
        ),
    )
    .unwrap();

    lhci_notify()
        .args(["notify", "--status", "0"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No assertion results"));

    let body: serde_json::Value = serde_json::from_str(&server.request().body).unwrap();
    assert_eq!(body["attachments"].as_array().unwrap().len(), 1);
    assert_eq!(body["attachments"][0]["pretext"], "Perf budget");
    assert_eq!(body["attachments"][0]["color"], "good");
}
