//! Error types for the todo API client.
//!
//! # Design
//! `ItemNotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status." Every other status lands in `UnknownApi` with the exact
//! code observed. Failures where the server answered 200 with an unusable body,
//! or never answered at all, get their own variants so they are never mistaken
//! for an API-level status.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by every `TodoApiClient` operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404. The requested task does not exist.
    #[error("item not found")]
    ItemNotFound,

    /// The server returned a status other than 200 or 404.
    #[error("unknown API error: HTTP {0}")]
    UnknownApi(u16),

    /// The server returned 200 but the body was not the expected JSON shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// No HTTP response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// HTTP status that produced this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ItemNotFound => Some(404),
            ApiError::UnknownApi(status) => Some(*status),
            ApiError::Deserialization(_) => Some(200),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::ItemNotFound)
    }
}
