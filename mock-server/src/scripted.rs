//! Scripted HTTP server: replays enqueued responses in order and records
//! every request it receives.

use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};

use crate::background::Background;

/// A response to replay for one incoming request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// A request as seen by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct Script {
    responses: VecDeque<MockResponse>,
    requests: VecDeque<RecordedRequest>,
    received: usize,
}

type Shared = Arc<Mutex<Script>>;

fn lock(script: &Shared) -> MutexGuard<'_, Script> {
    script.lock().unwrap_or_else(PoisonError::into_inner)
}

fn scripted_app(script: Shared) -> Router {
    Router::new().fallback(replay).with_state(script)
}

async fn replay(
    State(script): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
    };
    log::debug!("{} {}", recorded.method, recorded.path);

    let next = {
        let mut script = lock(&script);
        script.requests.push_back(recorded);
        script.received += 1;
        script.responses.pop_front()
    };

    match next {
        Some(MockResponse {
            status,
            location,
            body,
        }) => {
            let mut response =
                (status, [(header::CONTENT_TYPE, "application/json")], body).into_response();
            if let Some(value) = location.and_then(|l| HeaderValue::from_str(&l).ok()) {
                response.headers_mut().insert(header::LOCATION, value);
            }
            response
        }
        None => {
            log::warn!("no scripted response left, answering 500");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// A running scripted server bound to an ephemeral local port.
///
/// Dropping it signals the server to shut down.
pub struct MockServer {
    server: Background,
    script: Shared,
}

impl MockServer {
    pub fn start() -> io::Result<Self> {
        let script = Shared::default();
        let server = Background::serve(scripted_app(Arc::clone(&script)))?;
        Ok(Self { server, script })
    }

    pub fn addr(&self) -> SocketAddr {
        self.server.addr()
    }

    /// Base endpoint, e.g. `http://127.0.0.1:49152`.
    pub fn base_url(&self) -> String {
        self.server.base_url()
    }

    /// Panics if `status` cannot be sent as a final response (1xx or
    /// outside 100..=999).
    pub fn enqueue(&self, status: u16, body: impl Into<String>) {
        self.push(final_status(status), None, body.into());
    }

    /// Enqueue a redirect carrying a `Location` header and an empty body.
    pub fn enqueue_redirect(&self, status: u16, location: &str) {
        self.push(final_status(status), Some(location.to_string()), String::new());
    }

    fn push(&self, status: StatusCode, location: Option<String>, body: String) {
        lock(&self.script).responses.push_back(MockResponse {
            status,
            location,
            body,
        });
    }

    /// Enqueue a response with an empty body.
    pub fn enqueue_status(&self, status: u16) {
        self.enqueue(status, String::new());
    }

    /// Oldest request not yet taken.
    pub fn take_request(&self) -> Option<RecordedRequest> {
        lock(&self.script).requests.pop_front()
    }

    /// Total requests received, including those already taken.
    pub fn request_count(&self) -> usize {
        lock(&self.script).received
    }
}

fn final_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if !code.is_informational() => code,
        _ => panic!("status {status} cannot be scripted as a final response"),
    }
}
