//! # CLI End-to-End Tests
//!
//! Runs the `citepress` binary against a mock paginated API and a mock
//! OpenAI-compatible summarizer endpoint.

use assert_cmd::prelude::*;
use citepress_test_utils::mount_paged_api;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use tempfile::tempdir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a chat-completions endpoint that always answers with a fixed
/// summary.
async fn mount_summarizer(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "a condensed context"}}],
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_processes_and_caches_rows() {
    // --- 1. Arrange ---
    let api_server = MockServer::start().await;
    mount_paged_api(
        &api_server,
        &[vec![json!({
            "response": "the answer",
            "source": [{"id": 1, "context": "long context", "link": "https://a"}],
        })]],
    )
    .await;
    let ai_server = MockServer::start().await;
    mount_summarizer(&ai_server).await;
    let temp_dir = tempdir().unwrap();
    let cache_path = temp_dir.path().join("cached_data.json");

    // --- 2. Act ---
    let mut cmd = Command::cargo_bin("citepress").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("LOCAL_AI_API_URL", format!("{}/v1/chat/completions", ai_server.uri()))
        .arg(format!("{}/api", api_server.uri()))
        .arg("--model")
        .arg("local-test")
        .arg("--cache-file")
        .arg(cache_path.to_str().unwrap());

    // --- 3. Assert ---
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Data processed successfully"))
        .stdout(predicate::str::contains("the answer"))
        .stdout(predicate::str::contains("https://a"));
    let cached = std::fs::read_to_string(&cache_path).unwrap();
    assert!(cached.contains("a condensed context"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_reports_error_banner_on_failed_fetch() {
    // --- 1. Arrange ---
    let api_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api_server)
        .await;
    let ai_server = MockServer::start().await;
    mount_summarizer(&ai_server).await;
    let temp_dir = tempdir().unwrap();

    // --- 2. Act ---
    let mut cmd = Command::cargo_bin("citepress").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("LOCAL_AI_API_URL", format!("{}/v1/chat/completions", ai_server.uri()))
        .arg(format!("{}/api", api_server.uri()))
        .arg("--model")
        .arg("local-test");

    // --- 3. Assert ---
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch data"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_distinguishes_empty_result_set_from_error() {
    // --- 1. Arrange ---
    let api_server = MockServer::start().await;
    mount_paged_api(&api_server, &[]).await;
    let ai_server = MockServer::start().await;
    mount_summarizer(&ai_server).await;
    let temp_dir = tempdir().unwrap();

    // --- 2. Act ---
    let mut cmd = Command::cargo_bin("citepress").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("LOCAL_AI_API_URL", format!("{}/v1/chat/completions", ai_server.uri()))
        .arg(format!("{}/api", api_server.uri()))
        .arg("--model")
        .arg("local-test");

    // --- 3. Assert ---
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No records found"));
}
