//! Translates a raw `HttpResponse` into `Result<T, ApiError>`.
//!
//! Only 200 is success and only 404 is "not found"; every other status,
//! including unexpected 2xx and 3xx codes, is an `UnknownApi` error carrying
//! the code as observed. The body is parsed on the success path and nowhere
//! else.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Outcome class of an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    NotFound,
    Unknown(u16),
}

pub fn classify(status: u16) -> StatusClass {
    match status {
        200 => StatusClass::Success,
        404 => StatusClass::NotFound,
        other => StatusClass::Unknown(other),
    }
}

/// Map a response onto the typed result for an operation returning `T`.
pub fn map_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    match classify(response.status) {
        StatusClass::Success => serde_json::from_str(&response.body).map_err(|e| {
            log::warn!("undecodable 200 response body: {e}");
            ApiError::Deserialization(e.to_string())
        }),
        StatusClass::NotFound => Err(ApiError::ItemNotFound),
        StatusClass::Unknown(status) => Err(ApiError::UnknownApi(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    const TASK: &str = r#"{"id":"1","userId":"1","title":"delectus aut autem","completed":false}"#;

    #[test]
    fn classification_is_total() {
        for status in 0..=u16::MAX {
            let expected = match status {
                200 => StatusClass::Success,
                404 => StatusClass::NotFound,
                _ => StatusClass::Unknown(status),
            };
            assert_eq!(classify(status), expected, "status {status}");
        }
    }

    #[test]
    fn other_statuses_preserve_the_code() {
        for status in [100, 201, 204, 301, 304, 400, 401, 403, 418, 500, 502, 503] {
            let response = HttpResponse::new(status, TASK);
            let err = map_response::<Task>(&response).unwrap_err();
            assert_eq!(err, ApiError::UnknownApi(status));
        }
    }

    #[test]
    fn not_found_ignores_body() {
        let response = HttpResponse::new(404, "<html>not json</html>");
        assert_eq!(map_response::<Task>(&response), Err(ApiError::ItemNotFound));
    }

    #[test]
    fn non_success_with_empty_body_is_not_parsed() {
        let response = HttpResponse::new(500, "");
        assert_eq!(map_response::<Vec<Task>>(&response), Err(ApiError::UnknownApi(500)));
    }

    #[test]
    fn success_parses_object() {
        let task: Task = map_response(&HttpResponse::new(200, TASK)).unwrap();
        assert_eq!(task, Task::new("1", "1", "delectus aut autem", false));
    }

    #[test]
    fn success_with_wrong_shape_is_a_deserialization_error() {
        let response = HttpResponse::new(200, TASK);
        let err = map_response::<Vec<Task>>(&response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn success_with_empty_body_is_a_deserialization_error() {
        let err = map_response::<Task>(&HttpResponse::new(200, "")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
