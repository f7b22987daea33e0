//! Domain DTOs for the todo API.
//!
//! # Design
//! `Task` is defined independently from the mock-server's schema. Integration
//! tests against the fake API catch any drift between the two crates.
//!
//! The public JSONPlaceholder service sends `id` and `userId` as integers while
//! other deployments send strings, so both identifier fields accept either and
//! normalise to `String`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single TODO item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Task {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    #[serde(rename = "userId", deserialize_with = "string_or_integer")]
    pub user_id: String,
    pub title: String,
    #[serde(rename = "completed")]
    pub is_finished: bool,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        is_finished: bool,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            is_finished,
        }
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an integer identifier")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_identifiers() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","userId":"7","title":"delectus aut autem","completed":false}"#,
        )
        .unwrap();
        assert_eq!(task, Task::new("1", "7", "delectus aut autem", false));
    }

    #[test]
    fn parses_integer_identifiers() {
        let task: Task =
            serde_json::from_str(r#"{"userId":1,"id":42,"title":"et porro tempora","completed":true}"#)
                .unwrap();
        assert_eq!(task.id, "42");
        assert_eq!(task.user_id, "1");
        assert!(task.is_finished);
    }

    #[test]
    fn ignores_unknown_keys() {
        let task: Task = serde_json::from_str(
            r#"{"id":"1","userId":"1","title":"t","completed":false,"priority":3}"#,
        )
        .unwrap();
        assert_eq!(task.title, "t");
    }

    #[test]
    fn rejects_missing_completed_flag() {
        let result: Result<Task, _> = serde_json::from_str(r#"{"id":"1","userId":"1","title":"t"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_scalar_identifier() {
        let result: Result<Task, _> =
            serde_json::from_str(r#"{"id":["1"],"userId":"1","title":"t","completed":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parses_array_preserving_order() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id":"b","userId":"1","title":"second","completed":true},
                {"id":"a","userId":"1","title":"first","completed":false}]"#,
        )
        .unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn serializes_with_wire_keys() {
        let json = serde_json::to_value(Task::new("1", "2", "Test", true)).unwrap();
        assert_eq!(json["userId"], "2");
        assert_eq!(json["completed"], true);
        assert!(json.get("is_finished").is_none());
    }
}
