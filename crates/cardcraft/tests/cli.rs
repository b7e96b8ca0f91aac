// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the compiled `cardcraft` binary.
//!
//! Each run gets an empty scoped temp dir as working directory and XDG config
//! dir so no local `cardcraft.toml` leaks in; the provider is a wiremock server.

use std::path::Path;
use std::process::Output;

use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn isolated_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("cardcraft-cli-")
        .tempdir()
        .unwrap()
}

fn cardcraft(dir: &TempDir) -> Command {
    let dir: &Path = dir.path();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cardcraft"));
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("CARDCRAFT_OPENAI_API_KEY")
        .env_remove("CARDCRAFT_OPENAI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[tokio::test]
async fn preview_fallback_prints_template() {
    let dir = isolated_dir();
    let output = cardcraft(&dir)
        .args([
            "preview-fallback",
            "--occasion",
            "Birthday",
            "--recipient",
            "Ana",
            "--sender",
            "Lee",
        ])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Dear Ana, wishing you a wonderful birthday filled with joy and laughter! Have an amazing celebration. From, Lee"
    );
}

#[tokio::test]
async fn occasions_lists_catalog() {
    let dir = isolated_dir();
    let output = cardcraft(&dir).arg("occasions").output().await.unwrap();

    assert!(output.status.success());
    let listed: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(listed.len(), 11);
    assert_eq!(listed[0], "Birthday");
    assert_eq!(listed[10], "Other");
}

#[tokio::test]
async fn missing_api_key_halts_startup() {
    let dir = isolated_dir();
    let output = cardcraft(&dir)
        .args(["generate", "--occasion", "Birthday", "--recipient", "Ana", "--sender", "Lee"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("OpenAI API key not found").count(),
        1,
        "startup error should be reported once, stderr: {stderr}"
    );
    assert!(stderr.contains("OPENAI_API_KEY"), "stderr: {stderr}");
}

#[tokio::test]
async fn blank_recipient_exits_with_validation_error() {
    let dir = isolated_dir();
    let output = cardcraft(&dir)
        .env("OPENAI_API_KEY", "sk-test")
        .args(["generate", "--occasion", "Birthday", "--recipient", " ", "--sender", "Lee"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("recipientName"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn generate_prints_provider_message_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Happy birthday, Ana!"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = isolated_dir();
    let output = cardcraft(&dir)
        .env("OPENAI_API_KEY", "sk-test")
        .env("CARDCRAFT_OPENAI_BASE_URL", server.uri())
        .args([
            "generate",
            "--occasion",
            "Birthday",
            "--recipient",
            "Ana",
            "--sender",
            "Lee",
            "--json",
        ])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let body: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(body["message"], "Happy birthday, Ana!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn generate_falls_back_when_provider_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = isolated_dir();
    let output = cardcraft(&dir)
        .env("OPENAI_API_KEY", "sk-wrong")
        .env("CARDCRAFT_OPENAI_BASE_URL", server.uri())
        .args(["generate", "--occasion", "Sympathy", "--recipient", "Jo", "--sender", "Max"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Dear Jo, sending you my warmest wishes on this special occasion. From, Max"
    );
}

#[tokio::test]
async fn scoped_dirs_are_removed_on_drop() {
    let dir = isolated_dir();
    let path = dir.path().to_path_buf();
    let output = cardcraft(&dir).arg("occasions").output().await.unwrap();
    assert!(output.status.success());

    drop(dir);
    assert!(!path.exists());
}
