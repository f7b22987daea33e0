//! Transport seam: executes an `HttpRequest` and hands back an `HttpResponse`.
//!
//! # Design
//! The core never performs I/O itself. A `Transport` returns `Ok` for every
//! response that reached the HTTP layer, whatever its status, and `Err` only
//! when no response exists (bad URL, refused connection, timeout). Status
//! interpretation is left entirely to the mapper.
//!
//! `UreqTransport` is the default blocking implementation. Timeouts are the
//! transport's concern and are configured here, never on the client. It never
//! follows redirects, so a 3xx reaches the mapper with its own status, and it
//! reads bodies of any size.

use std::fmt;

use thiserror::Error;

use crate::http::{HttpRequest, HttpResponse};

/// Why a request produced no HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    InvalidUrl,
    Connect,
    Timeout,
    Io,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::InvalidUrl => "invalid url",
            TransportErrorKind::Connect => "connection failed",
            TransportErrorKind::Timeout => "timed out",
            TransportErrorKind::Io => "i/o error",
            TransportErrorKind::Other => "transport error",
        };
        f.write_str(name)
    }
}

/// A request that never reached the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Executes a single HTTP round-trip. One attempt per call, no retries.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::ureq_transport::UreqTransport;

#[cfg(feature = "ureq")]
mod ureq_transport {
    use std::fmt;
    use std::io;
    use std::time::Duration;

    use super::{Transport, TransportError, TransportErrorKind};
    use crate::http::{HttpRequest, HttpResponse};

    /// Blocking transport backed by a `ureq::Agent`.
    ///
    /// The agent is configured with `http_status_as_error(false)` and
    /// `max_redirects(0)` so 3xx/4xx/5xx responses come back as data rather
    /// than `Err`.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::build(None)
        }

        /// Bound every request (connect, send, and body read) by `timeout`.
        pub fn with_timeout(timeout: Duration) -> Self {
            Self::build(Some(timeout))
        }

        fn build(timeout: Option<Duration>) -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .max_redirects(0)
                .timeout_global(timeout)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl fmt::Debug for UreqTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("UreqTransport").finish_non_exhaustive()
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.agent.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let mut response = builder.call().map_err(from_ureq)?;
            let status = response.status().as_u16();
            let body = response
                .body_mut()
                .with_config()
                .limit(u64::MAX)
                .read_to_string()
                .map_err(from_ureq)?;

            Ok(HttpResponse { status, body })
        }
    }

    fn from_ureq(err: ureq::Error) -> TransportError {
        let kind = match &err {
            ureq::Error::Timeout(_) => TransportErrorKind::Timeout,
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => TransportErrorKind::Connect,
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => TransportErrorKind::InvalidUrl,
            ureq::Error::Io(io_err) => match io_err.kind() {
                io::ErrorKind::ConnectionRefused
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted => TransportErrorKind::Connect,
                io::ErrorKind::TimedOut => TransportErrorKind::Timeout,
                _ => TransportErrorKind::Io,
            },
            _ => TransportErrorKind::Other,
        };
        TransportError::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16);

    impl Transport for Fixed {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::new(self.0, ""))
        }
    }

    fn status_via<T: Transport>(transport: T) -> u16 {
        let request = HttpRequest::get_json("http://localhost/todos".to_string());
        transport.execute(&request).unwrap().status
    }

    #[test]
    fn references_and_boxes_are_transports() {
        let fixed = Fixed(204);
        assert_eq!(status_via(&fixed), 204);

        let boxed: Box<dyn Transport> = Box::new(Fixed(418));
        assert_eq!(status_via(boxed), 418);
    }

    #[test]
    fn display_names_the_kind() {
        let err = TransportError::new(TransportErrorKind::Timeout, "after 5s");
        assert_eq!(err.to_string(), "timed out: after 5s");
    }
}
