//! Typed, blocking client for a remote TODO-item HTTP API.
//!
//! # Overview
//! Two read operations, `GET /todos` and `GET /todos/{id}`, each returning
//! `Result<_, ApiError>`. HTTP statuses are translated into values rather
//! than panics: 200 parses the body, 404 is `ItemNotFound`, anything else is
//! `UnknownApi(status)`.
//!
//! # Design
//! - `TodoClient` is stateless. It holds only `base_url` and splits each
//!   operation into `build_*` (produces request) and `parse_*` (consumes
//!   response), so the I/O boundary is explicit.
//! - `TodoApiClient` pairs a `TodoClient` with a `Transport`. The default
//!   transport is `ureq` (cargo feature `ureq`, enabled by default).
//! - Failures with no HTTP response are `ApiError::Transport`, never folded
//!   into a status-based variant.

pub mod client;
pub mod error;
pub mod http;
pub mod mapper;
pub mod transport;
pub mod types;

pub use client::{DefaultTransport, TodoApiClient, TodoClient};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use mapper::{classify, map_response, StatusClass};
pub use transport::{Transport, TransportError, TransportErrorKind};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::Task;
