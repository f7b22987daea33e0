//! HTTP types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `TodoClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network; a
//! `Transport` (or any other host) executes the round-trip in between.
//!
//! The API is read-only, so every request is a bodiless GET. The JSON
//! `Content-Type` header is still sent because the service has always
//! received it.

pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// A GET to `url` carrying the JSON `Accept` and `Content-Type` headers.
    pub fn get_json(url: String) -> Self {
        Self {
            url,
            headers: vec![
                (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
                (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            ],
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Any status the server sent is a response, including 4xx and 5xx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
