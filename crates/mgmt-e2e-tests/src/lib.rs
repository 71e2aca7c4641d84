use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::Result;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use mgmt_client::{auth::AUTH_HASH_PATH, datastore::DATASTORE_WRITE_PATH};
use mgmt_server::config::{Parser, ServerConfig};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

/// How the mocked auth service answers hash requests
#[derive(Debug, Clone)]
pub enum HashBehavior {
    /// 200 with `{"hash": <value>}`
    Hash(String),
    /// 200 with given raw body
    Raw(String),
    Status(StatusCode, String),
    Delayed(Duration, String),
}

/// How the mocked datastore writer answers write requests
#[derive(Debug, Clone)]
pub enum WriteBehavior {
    Accept,
    Status(StatusCode, String),
    Delayed(Duration),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct Recorded {
    hash_calls: Vec<RecordedCall>,
    write_calls: Vec<RecordedCall>,
}

#[derive(Clone)]
struct MockState {
    hash: HashBehavior,
    write: WriteBehavior,
    recorded: Arc<Mutex<Recorded>>,
}

/// Single HTTP server playing both the auth service and the datastore writer
pub struct MockUpstream {
    pub base_url: Url,
    state: MockState,
}

impl MockUpstream {
    pub async fn start(hash: HashBehavior, write: WriteBehavior) -> Result<Self> {
        let state = MockState {
            hash,
            write,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        };
        let app = Router::new()
            .route(AUTH_HASH_PATH, post(hash_handler))
            .route(DATASTORE_WRITE_PATH, post(write_handler))
            .with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, app).await });
        info!("Mock upstream listening on {addr}");

        Ok(MockUpstream {
            base_url: format!("http://{addr}").parse()?,
            state,
        })
    }

    pub async fn accepting(hash: &str) -> Result<Self> {
        Self::start(HashBehavior::Hash(hash.to_string()), WriteBehavior::Accept).await
    }

    pub fn hash_calls(&self) -> Vec<RecordedCall> {
        self.state.recorded.lock().unwrap().hash_calls.clone()
    }

    pub fn write_calls(&self) -> Vec<RecordedCall> {
        self.state.recorded.lock().unwrap().write_calls.clone()
    }
}

fn record(headers: &HeaderMap, body: &str) -> RecordedCall {
    RecordedCall {
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())),
    }
}

async fn hash_handler(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    state
        .recorded
        .lock()
        .unwrap()
        .hash_calls
        .push(record(&headers, &body));
    match state.hash {
        HashBehavior::Hash(hash) => axum::Json(serde_json::json!({ "hash": hash })).into_response(),
        HashBehavior::Raw(raw) => (StatusCode::OK, raw).into_response(),
        HashBehavior::Status(status, body) => (status, body).into_response(),
        HashBehavior::Delayed(delay, hash) => {
            tokio::time::sleep(delay).await;
            axum::Json(serde_json::json!({ "hash": hash })).into_response()
        }
    }
}

async fn write_handler(State(state): State<MockState>, headers: HeaderMap, body: String) -> Response {
    state
        .recorded
        .lock()
        .unwrap()
        .write_calls
        .push(record(&headers, &body));
    match state.write {
        WriteBehavior::Accept => StatusCode::OK.into_response(),
        WriteBehavior::Status(status, body) => (status, body).into_response(),
        WriteBehavior::Delayed(delay) => {
            tokio::time::sleep(delay).await;
            StatusCode::OK.into_response()
        }
    }
}

/// URL where nothing listens
pub async fn closed_url() -> Result<Url> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}").parse()?)
}

/// Starts management server backed by `upstream`, returns its base URL
pub async fn launch_server(upstream: &MockUpstream, timeout: &str) -> Result<Url> {
    let upstream_url = upstream.base_url.to_string();
    let config = ServerConfig::try_parse_from([
        "mgmt-e2e-tests",
        "--listen-address",
        "127.0.0.1",
        "--auth-url",
        &upstream_url,
        "--datastore-writer-url",
        &upstream_url,
        "--timeout",
        timeout,
    ])?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(mgmt_server::run_with_listener(config, listener));
    Ok(format!("http://{addr}").parse()?)
}
