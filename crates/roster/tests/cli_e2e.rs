#![allow(deprecated)]

//! Runs the real `roster` binary against a mock users collection.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::process::Output;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USERS_PATH: &str = "/mockapi/users";

fn roster_cmd() -> Command {
    Command::new(cargo_bin("roster"))
}

fn users(count: usize) -> Value {
    let records: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": i.to_string(),
                "name": format!("User {}", i),
                "avatar": format!("https://avatars.test/{}.png", i),
                "createdAt": "2024-03-01T12:00:00.000Z"
            })
        })
        .collect();
    Value::Array(records)
}

/// Runs roster with `--base-url` pointed at the mock server and an empty config dir.
async fn run_roster(server: &MockServer, args: &[&str]) -> Output {
    run_roster_with_stdin(server, args, "").await
}

async fn run_roster_with_stdin(server: &MockServer, args: &[&str], stdin: &str) -> Output {
    let stdin = stdin.to_string();
    let base_url = format!("{}{}", server.uri(), USERS_PATH);
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let config_dir = TempDir::new().unwrap();
        roster_cmd()
            .env("ROSTER_CONFIG_DIR", config_dir.path())
            .env_remove("ROSTER_BASE_URL")
            .env_remove("RUST_LOG")
            .args(["--no-color", "--base-url", base_url.as_str()])
            .args(&args)
            .write_stdin(stdin)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_list(server: &MockServer, count: usize) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(count)))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_shows_first_page_and_bar() {
    let server = MockServer::start().await;
    mount_list(&server, 30).await;

    run_roster(&server, &["list"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("30 total · Page 1 / 3"))
        .stdout(predicate::str::contains("« ‹ [1] 2 3 › »"))
        .stdout(predicate::str::contains("User 12"))
        .stdout(predicate::str::contains("User 13").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_naked_invocation_lists() {
    let server = MockServer::start().await;
    mount_list(&server, 2).await;

    run_roster(&server, &[])
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("2 total · Page 1 / 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_last_page() {
    let server = MockServer::start().await;
    mount_list(&server, 30).await;

    run_roster(&server, &["ls", "--page", "last"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 3 / 3"))
        .stdout(predicate::str::contains("User 30"))
        .stdout(predicate::str::contains("User 24 ").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_failure_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    run_roster(&server, &["list"])
        .await
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to load users"))
        .stderr(predicate::str::contains("Error: Failed to load users"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blank_create_sends_nothing() {
    let server = MockServer::start().await;
    mount_list(&server, 3).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    run_roster(&server, &["create", "   "])
        .await
        .assert()
        .failure()
        .stdout(predicate::str::contains("Create user"))
        .stderr(predicate::str::contains("Name is required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_prepends_the_new_user() {
    let server = MockServer::start().await;
    mount_list(&server, 3).await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "31",
            "name": "Ada Lovelace",
            "avatar": "",
            "createdAt": "2024-04-01T00:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_roster(&server, &["create", "Ada", "Lovelace"]).await;
    output
        .clone()
        .assert()
        .success()
        .stdout(predicate::str::contains("User created (31): Ada Lovelace"))
        .stdout(predicate::str::contains("4 total"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let ada = stdout.find("31  Ada Lovelace").unwrap();
    let first = stdout.find("User 1 ").unwrap();
    assert!(ada < first);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_unknown_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/404", USERS_PATH)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!("Not found")))
        .mount(&server)
        .await;

    run_roster(&server, &["view", "404"])
        .await
        .assert()
        .failure()
        .stdout(predicate::str::contains("User not found"))
        .stdout(predicate::str::contains("← Back to users"))
        .stderr(predicate::str::contains("Error: User not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_saves_edits_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/1", USERS_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(1)[0].clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/1", USERS_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Renamed",
            "avatar": "https://avatars.test/1.png",
            "createdAt": "2024-03-01T12:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    run_roster(&server, &["view", "1", "--name", "Renamed"])
        .await
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Renamed\n"))
        .stdout(predicate::str::contains("Saved"));

    let requests = server.received_requests().await.unwrap_or_default();
    let put = requests
        .iter()
        .find(|r| r.method.to_string() == "PUT")
        .unwrap();
    let body: Value = serde_json::from_slice(&put.body).unwrap();
    assert_eq!(body["name"], json!("Renamed"));
    assert_eq!(body["createdAt"], json!("2024-03-01T12:00:00.000Z"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_save_shows_the_typed_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/1", USERS_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(1)[0].clone()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("{}/1", USERS_PATH)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    run_roster(&server, &["view", "1", "--name", "Renamed"])
        .await
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("User 1\n"))
        .stdout(predicate::str::contains(
            "Failed to save changes\n  Name    Renamed\n",
        ))
        .stderr(predicate::str::contains("Error: Failed to save changes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_base_url_from_config_file() {
    let server = MockServer::start().await;
    mount_list(&server, 5).await;
    let base_url = format!("{}{}", server.uri(), USERS_PATH);

    let output = tokio::task::spawn_blocking(move || {
        let config_dir = TempDir::new().unwrap();
        fs::write(
            config_dir.path().join("roster.toml"),
            format!("base_url = \"{}\"\n", base_url),
        )
        .unwrap();
        roster_cmd()
            .env("ROSTER_CONFIG_DIR", config_dir.path())
            .env_remove("ROSTER_BASE_URL")
            .args(["--no-color", "list"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    output
        .assert()
        .success()
        .stdout(predicate::str::contains("5 total"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_browse_pages_from_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(users(30)))
        .expect(1)
        .mount(&server)
        .await;

    run_roster_with_stdin(&server, &["browse"], "n\nbogus\nl\nq\n")
        .await
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 / 3"))
        .stdout(predicate::str::contains("Page 2 / 3"))
        .stdout(predicate::str::contains("Page 3 / 3"))
        .stderr(predicate::str::contains("Unknown input: bogus"));
}

#[test]
fn test_completions_need_no_server() {
    roster_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn test_invalid_base_url_is_reported() {
    let config_dir = TempDir::new().unwrap();
    roster_cmd()
        .env("ROSTER_CONFIG_DIR", config_dir.path())
        .args(["--base-url", "ftp://example.com/users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}
