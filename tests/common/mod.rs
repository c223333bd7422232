//! Shared test fixtures: a mock exchange server plus a client wired to it.
//!
//! The mock records every request it sees (method, path, query, headers,
//! body) so tests can assert exactly what went over the wire, and answers
//! with canned payloads in the exchange's `{"data": ...}` envelope.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use ledgerx_rs::auth::Credentials;
use ledgerx_rs::LedgerXClient;
use serde_json::{json, Value};
use tokio::sync::Mutex;


pub const TEST_JWT: &str = "test-jwt-token";


/// One request as seen by the mock exchange.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}


/// State shared between the mock exchange and the test body.
#[derive(Clone, Default)]
pub struct TestServerState {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// When set, every route answers with this status and raw body instead
    /// of the canned payloads.
    forced_response: Arc<Mutex<Option<(u16, String)>>>,
}


impl TestServerState {
    pub async fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub async fn force_response(&self, status: u16, body: &str) {
        *self.forced_response.lock().await = Some((status, body.to_string()));
    }
}


async fn mock_exchange(
    State(state): State<TestServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query: HashMap<String, String> =
        serde_urlencoded::from_str(uri.query().unwrap_or("")).unwrap_or_default();
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
        body: serde_json::from_slice(&body).ok(),
    };
    state.requests.lock().await.push(recorded);

    if let Some((status, body)) = state.forced_response.lock().await.clone() {
        let status = StatusCode::from_u16(status).expect("invalid forced status");
        return (status, body).into_response();
    }

    canned_response(&method, uri.path()).into_response()
}


fn canned_response(method: &Method, path: &str) -> (StatusCode, String) {
    // Cancel endpoints answer success with an empty body
    if *method == Method::DELETE {
        return (StatusCode::OK, String::new());
    }
    let payload = match path {
        "/trading/contracts" | "/trading/contracts/traded" => {
            json!({ "data": [contract_fixture()] })
        }
        "/trading/positions" => json!({ "data": [] }),
        "/api/open-orders" => json!({ "data": [] }),
        "/api/orders" => json!({ "data": { "mid": "a0s9d8f7" } }),
        p if p.ends_with("/ticker") => json!({
            "data": {
                "ask": 1100,
                "bid": 1000,
                "last_trade": { "price": 1050 },
                "volume_24h": 12
            }
        }),
        p if p.ends_with("/position") => json!({
            "data": { "contract": contract_fixture(), "size": 2, "assigned_size": 0 }
        }),
        p if p.starts_with("/api/book-states/") => json!({
            "data": {
                "contract_id": 22230828,
                "book_states": [
                    { "is_ask": true, "price": 1100, "size": 3 },
                    { "is_ask": false, "price": 1000, "size": 5 }
                ]
            }
        }),
        p if p.starts_with("/trading/positions/") => json!({ "data": [] }),
        p if p.starts_with("/trading/contracts/") => json!({ "data": contract_fixture() }),
        _ => json!({ "data": {} }),
    };
    (StatusCode::OK, payload.to_string())
}


fn contract_fixture() -> Value {
    json!({
        "id": 22230828,
        "label": "BTC-Mini 27DEC2024 Future",
        "derivative_type": "future_contract",
        "underlying_asset": { "symbol": "CBTC" },
        "active": true,
        "date_live": "2024-06-28T04:00:00+0000",
        "date_expires": "2024-12-27T21:00:00+0000"
    })
}


/// Start a mock exchange and return a client pointed at it (both hosts).
pub async fn setup_client() -> (LedgerXClient, TestServerState) {
    let state = TestServerState::default();
    let router = Router::new()
        .fallback(mock_exchange)
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock exchange");
    let addr: SocketAddr = listener.local_addr().expect("mock exchange has no addr");
    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("mock exchange crashed");
    });
    let base_url = format!("http://{}", addr);
    let credentials = Credentials::new(TEST_JWT.to_string());
    let client =
        LedgerXClient::new_with_config(credentials, Some(base_url.clone()), Some(base_url));
    (client, state)
}
