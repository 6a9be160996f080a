//! Local mock eSignBase server for unit tests
//!
//! Tests mount their own `/api/...` routes on a router that already serves
//! `/oauth2/token`. The token endpoint hands out `token-1`, `token-2`, ... in
//! order, so a test can tell a fresh token from a reauthenticated one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Request, State};
use axum::routing::post;
use tokio::net::TcpListener;

use crate::client::ESignBaseClient;
use common::ClientConfig;
use esignbase_auth::{OAuth2Client, Scope};

/// An API request as seen by the mock server.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Shared handler state: token hits and every recorded API request.
#[derive(Clone, Default)]
pub(crate) struct Recorder {
    token_hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn api_hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no API request recorded")
    }

    /// Record an API request and return what was recorded.
    pub async fn record(&self, request: Request) -> RecordedRequest {
        // Header reads must finish before the body await; `&Request` is not `Send`.
        let (authorization, content_type) = {
            let header = |name: &str| {
                request
                    .headers()
                    .get(name)
                    .map(|v| v.to_str().unwrap_or("").to_string())
            };
            (header("authorization"), header("content-type"))
        };
        let method = request.method().to_string();
        let path = request.uri().path().to_string();
        let query = request.uri().query().unwrap_or("").to_string();
        let body = axum::body::to_bytes(request.into_body(), 10 * 1024 * 1024)
            .await
            .unwrap();

        let recorded = RecordedRequest {
            method,
            path,
            query,
            authorization,
            content_type,
            body: String::from_utf8_lossy(&body).to_string(),
        };
        self.requests.lock().unwrap().push(recorded.clone());
        recorded
    }
}

async fn issue_token(State(recorder): State<Recorder>) -> axum::Json<serde_json::Value> {
    let n = recorder.token_hits.fetch_add(1, Ordering::SeqCst) + 1;
    axum::Json(serde_json::json!({
        "access_token": format!("token-{n}"),
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
}

/// Serve `api` plus a working token endpoint on an ephemeral port.
pub(crate) async fn start_server(api: Router<Recorder>) -> (ClientConfig, Recorder) {
    start_server_with_token_route(api.route("/oauth2/token", post(issue_token))).await
}

/// Serve `app` as-is; the test supplies its own token endpoint.
pub(crate) async fn start_server_with_token_route(
    app: Router<Recorder>,
) -> (ClientConfig, Recorder) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorder = Recorder::default();
    let app = app.with_state(recorder.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (
        ClientConfig::with_base_url(format!("http://{addr}/")),
        recorder,
    )
}

/// Start the server and return a client whose credential already holds `token-1`.
pub(crate) async fn connected_client(
    api: Router<Recorder>,
) -> (ESignBaseClient, OAuth2Client, Recorder) {
    let (config, recorder) = start_server(api).await;
    let client = ESignBaseClient::with_config(config).unwrap();
    let mut credential = OAuth2Client::client_credentials("id", "secret", [Scope::All]);
    client.connect(&mut credential).await.unwrap();
    assert_eq!(credential.access_token(), Some("token-1"));
    (client, credential, recorder)
}
