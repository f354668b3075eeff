//! Tests for write mode.

use crate::support::*;
use predicates::prelude::*;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_write_mode_overwrites() {
    let server = MockServer::start().await;
    mock_userpass_login(&server, 200, LOGIN_OK).await;
    mock_write(&server, json!({ "demo": "real", "cat": "dog" }), 204, "").await;
    let t = Test::new();
    let config = t.userpass_config(&server.uri());
    let secrets = t.secrets_file("WRITE", &[("demo", "real"), ("cat", "dog")]);

    t.write(&config, &secrets)
        .success()
        .stdout(predicate::str::contains("wrote 2 secrets"));

    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn test_update_mode_merges_remote() {
    let server = MockServer::start().await;
    mock_userpass_login(&server, 200, LOGIN_OK).await;
    mock_read(&server, 200, r#"{"data":{"demo":"old","kept":"remote"}}"#).await;
    mock_write(&server, json!({ "demo": "real", "kept": "remote" }), 204, "").await;
    let t = Test::new();
    let config = t.userpass_config(&server.uri());
    let secrets = t.secrets_file(" update ", &[("demo", "real")]);

    t.write(&config, &secrets)
        .success()
        .stdout(predicate::str::contains("wrote 2 secrets"));

    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_unknown_mode_writes_nothing() {
    let server = MockServer::start().await;
    mock_userpass_login(&server, 200, LOGIN_OK).await;
    mock_no_write(&server).await;
    let t = Test::new();
    let config = t.userpass_config(&server.uri());
    let secrets = t.secrets_file("APPEND", &[("demo", "real")]);

    t.write(&config, &secrets)
        .success()
        .stderr(predicate::str::contains("nothing written"));

    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_write_rejected_is_reported() {
    let server = MockServer::start().await;
    mock_userpass_login(&server, 200, LOGIN_OK).await;
    mock_write(
        &server,
        json!({ "demo": "real" }),
        400,
        r#"{"errors":["permission denied"]}"#,
    )
    .await;
    let t = Test::new();
    let config = t.userpass_config(&server.uri());
    let secrets = t.secrets_file("WRITE", &[("demo", "real")]);

    t.write(&config, &secrets)
        .failure()
        .stderr(predicate::str::contains("write rejected: status code 400"))
        .stderr(predicate::str::contains("permission denied"));
}
