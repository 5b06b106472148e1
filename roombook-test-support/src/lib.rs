//! Stub reservation backend for integration tests.
//!
//! [`StubServer`] is an axum app on an ephemeral loopback port. It answers
//! every request, whatever the method or path, with the next canned
//! [`StubResponse`] and records what it was sent. Once the canned
//! responses run out it answers `503`.

use std::collections::VecDeque;
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

/// One request as seen by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method, upper case.
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Request body as text.
    pub body: String,
}

impl RecordedRequest {
    /// Parses the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// A canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubResponse {
    /// Reply with `status` and a JSON `body`.
    Reply {
        /// HTTP status code.
        status: u16,
        /// Response body, sent verbatim.
        body: String,
    },
    /// Accept the request and never answer it.
    Stall,
}

impl StubResponse {
    /// A response with a JSON body.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        Self::Reply {
            status,
            body: body.to_string(),
        }
    }

    /// A response with a raw body.
    #[must_use]
    pub fn raw(status: u16, body: &str) -> Self {
        Self::Reply {
            status,
            body: body.to_string(),
        }
    }

    /// A `200` listing of `reservations`.
    ///
    /// # Panics
    ///
    /// Panics if a record does not serialize.
    #[must_use]
    pub fn list<T: Serialize>(reservations: &[T]) -> Self {
        let records = serde_json::to_value(reservations).expect("records serialize");
        Self::json(200, json!({ "reservations": records }))
    }

    /// A `200` acknowledgement.
    #[must_use]
    pub fn ok() -> Self {
        Self::json(200, json!({ "message": "ok" }))
    }
}

impl From<(u16, Value)> for StubResponse {
    fn from((status, body): (u16, Value)) -> Self {
        Self::json(status, body)
    }
}

#[derive(Debug, Default)]
struct Shared {
    responses: Mutex<VecDeque<StubResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A running stub backend.
///
/// The server stops when this value is dropped.
pub struct StubServer {
    addr: SocketAddr,
    shared: Arc<Shared>,
    _runtime: Runtime,
}

impl StubServer {
    /// Starts serving `responses`, in order, on an ephemeral loopback port.
    ///
    /// # Panics
    ///
    /// Panics if the listener or the runtime cannot be set up.
    pub fn start<I>(responses: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StubResponse>,
    {
        let shared = Arc::new(Shared {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        });

        let listener = StdTcpListener::bind("127.0.0.1:0").expect("failed to bind stub");
        listener
            .set_nonblocking(true)
            .expect("failed to make stub listener non-blocking");
        let addr = listener.local_addr().expect("failed to read stub address");

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("stub-backend")
            .enable_io()
            .build()
            .expect("failed to start stub runtime");

        let listener = {
            let _guard = runtime.enter();
            tokio::net::TcpListener::from_std(listener).expect("failed to register stub listener")
        };
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&shared));
        runtime.spawn(async move { axum::serve(listener, app).await });

        Self {
            addr,
            shared,
            _runtime: runtime,
        }
    }

    /// The collection endpoint on this server.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api/reservations", self.addr)
    }

    /// Everything received so far.
    ///
    /// # Panics
    ///
    /// Panics if a handler panicked while holding the request log.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

async fn respond(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    shared.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body,
    });

    let next = shared.responses.lock().unwrap().pop_front();
    match next {
        Some(StubResponse::Reply { status, body }) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Some(StubResponse::Stall) => std::future::pending().await,
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            axum::Json(json!({ "error": "no canned response left" })),
        )
            .into_response(),
    }
}
