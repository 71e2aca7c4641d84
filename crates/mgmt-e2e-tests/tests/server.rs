use axum::http::StatusCode;
use mgmt_cli::{config::CliConfig, run::run};
use mgmt_e2e_tests::{launch_server, HashBehavior, MockUpstream, WriteBehavior};
use mgmt_server::config::Parser as _;
use mgmt_types::api::{ErrorResponse, SetPasswordRequest, HEALTH_PATH, SET_PASSWORD_PATH};
use serde_json::json;
use tracing::info;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_health() {
    let upstream = MockUpstream::accepting("H1").await.unwrap();
    let base_url = launch_server(&upstream, "5s").await.unwrap();

    let response = reqwest::get(base_url.join(HEALTH_PATH).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
#[traced_test]
async fn test_set_password_endpoint() {
    let upstream = MockUpstream::accepting("H9").await.unwrap();
    let base_url = launch_server(&upstream, "5s").await.unwrap();

    let request = SetPasswordRequest {
        user_id: 9,
        password: "admin".to_string(),
    };
    let response = reqwest::Client::new()
        .post(base_url.join(SET_PASSWORD_PATH).unwrap())
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        upstream.write_calls()[0].body["events"][0],
        json!({"type": "update", "fqid": "user/9", "fields": {"password": "H9"}})
    );
}

#[tokio::test]
#[traced_test]
async fn test_set_password_endpoint_upstream_failure() {
    let upstream = MockUpstream::start(
        HashBehavior::Status(StatusCode::BAD_REQUEST, "nope".to_string()),
        WriteBehavior::Accept,
    )
    .await
    .unwrap();
    let base_url = launch_server(&upstream, "5s").await.unwrap();

    let request = SetPasswordRequest {
        user_id: 9,
        password: "admin".to_string(),
    };
    let response = reqwest::Client::new()
        .post(base_url.join(SET_PASSWORD_PATH).unwrap())
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json().await.unwrap();
    info!("Error response: {}", body.error);
    assert_eq!(
        body.error,
        "hash password: auth service returned 400 Bad Request: nope"
    );
    assert!(upstream.write_calls().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_set_password_endpoint_timeout() {
    let upstream = MockUpstream::start(
        HashBehavior::Delayed(std::time::Duration::from_secs(5), "H".to_string()),
        WriteBehavior::Accept,
    )
    .await
    .unwrap();
    let base_url = launch_server(&upstream, "200ms").await.unwrap();

    let request = SetPasswordRequest {
        user_id: 1,
        password: "admin".to_string(),
    };
    let response = reqwest::Client::new()
        .post(base_url.join(SET_PASSWORD_PATH).unwrap())
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(upstream.write_calls().is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_cli_set_password() {
    let upstream = MockUpstream::accepting("H3").await.unwrap();
    let base_url = launch_server(&upstream, "5s").await.unwrap();
    let address = base_url.to_string();

    let config = CliConfig::try_parse_from([
        "mgmt-cli",
        "set-password",
        "--address",
        &address,
        "-u",
        "3",
        "-p",
        "n3w",
    ])
    .unwrap();
    run(config).await.unwrap();

    assert_eq!(upstream.hash_calls()[0].body, json!({"toHash": "n3w"}));
    assert_eq!(
        upstream.write_calls()[0].body["events"][0]["fqid"],
        "user/3"
    );
}

#[tokio::test]
#[traced_test]
async fn test_cli_reports_failure() {
    let upstream = MockUpstream::start(
        HashBehavior::Hash("H".to_string()),
        WriteBehavior::Status(StatusCode::BAD_REQUEST, "no such user".to_string()),
    )
    .await
    .unwrap();
    let base_url = launch_server(&upstream, "5s").await.unwrap();
    let address = base_url.to_string();

    let config = CliConfig::try_parse_from([
        "mgmt-cli",
        "set-password",
        "--address",
        &address,
        "-u",
        "404",
    ])
    .unwrap();
    let err = run(config).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("reset password: management service returned 502"));
    assert!(message.contains("set password: datastore writer service returned 400"));
}
