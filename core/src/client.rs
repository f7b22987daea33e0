//! Request builder, response parser, and the two read operations.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`, so
//! the core stays deterministic and can be driven by any host.
//!
//! `TodoApiClient` composes a `TodoClient` with a `Transport` and runs the
//! round-trip itself. It shares nothing mutable between calls, so operations
//! may be issued concurrently when the transport allows it.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::mapper::map_response;
use crate::transport::Transport;
use crate::types::Task;

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_all_tasks(&self) -> HttpRequest {
        HttpRequest::get_json(format!("{}/todos", self.base_url))
    }

    /// The id is substituted verbatim; the server decides whether it exists.
    pub fn build_task_by_id(&self, id: &str) -> HttpRequest {
        HttpRequest::get_json(format!("{}/todos/{id}", self.base_url))
    }

    pub fn parse_all_tasks(&self, response: &HttpResponse) -> Result<Vec<Task>, ApiError> {
        map_response(response)
    }

    pub fn parse_task_by_id(&self, response: &HttpResponse) -> Result<Task, ApiError> {
        map_response(response)
    }
}

/// Client for the remote TODO API.
///
/// Every operation returns `Ok` with the parsed value or `Err` with an
/// `ApiError`; API failures are never panics.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T = DefaultTransport> {
    client: TodoClient,
    transport: T,
}

#[cfg(feature = "ureq")]
pub type DefaultTransport = crate::transport::UreqTransport;

#[cfg(not(feature = "ureq"))]
pub type DefaultTransport = NoTransport;

/// Placeholder default when no transport feature is compiled in.
#[cfg(not(feature = "ureq"))]
#[derive(Debug, Clone, Copy)]
pub enum NoTransport {}

#[cfg(not(feature = "ureq"))]
impl Transport for NoTransport {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, crate::TransportError> {
        match *self {}
    }
}

#[cfg(feature = "ureq")]
impl TodoApiClient {
    /// Client for `base_url` using the default blocking transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> TodoApiClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `GET /todos`. Array order is preserved; `[]` yields an empty `Vec`.
    pub fn all_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.send(self.client.build_all_tasks())?;
        self.client.parse_all_tasks(&response)
    }

    /// `GET /todos/{id}`.
    pub fn task_by_id(&self, id: &str) -> Result<Task, ApiError> {
        let response = self.send(self.client.build_task_by_id(id))?;
        self.client.parse_task_by_id(&response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("GET {}", request.url);
        match self.transport.execute(&request) {
            Ok(response) => {
                log::debug!("GET {} -> {}", request.url, response.status);
                Ok(response)
            }
            Err(err) => {
                log::warn!("GET {} failed: {err}", request.url);
                Err(err.into())
            }
        }
    }
}
