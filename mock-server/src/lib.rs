//! Test doubles for the TODO API.
//!
//! - [`app`] is a fake API serving a read-only task store at `GET /todos` and
//!   `GET /todos/{id}`, the same routes the real service exposes. [`FakeApi`]
//!   runs it on a background thread for blocking clients.
//! - [`MockServer`] replays scripted responses and records every request it
//!   receives, for asserting on exact statuses, paths and headers.

mod background;
mod scripted;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use background::Background;
pub use scripted::{MockResponse, MockServer, RecordedRequest};

/// Task as stored by the fake API. Identifiers are integers, as on
/// JSONPlaceholder.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

pub type Store = Arc<Vec<Task>>;

/// The 200-task fixture shared with the client tests.
pub const TASKS_FIXTURE: &str = include_str!("../../fixtures/tasks.json");

pub fn seed_tasks() -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(TASKS_FIXTURE)
}

pub fn app(tasks: Vec<Task>) -> Router {
    let store: Store = Arc::new(tasks);
    Router::new()
        .route("/todos", get(list_tasks))
        .route("/todos/{id}", get(get_task))
        .with_state(store)
}

pub async fn run(listener: TcpListener, tasks: Vec<Task>) -> io::Result<()> {
    axum::serve(listener, app(tasks)).await
}

/// The fake API served on an ephemeral local port until dropped.
pub struct FakeApi {
    server: Background,
}

impl FakeApi {
    pub fn start(tasks: Vec<Task>) -> io::Result<Self> {
        Ok(Self {
            server: Background::serve(app(tasks))?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.server.addr()
    }

    pub fn base_url(&self) -> String {
        self.server.base_url()
    }
}

async fn list_tasks(State(store): State<Store>) -> Json<Vec<Task>> {
    log::debug!("listing {} tasks", store.len());
    Json(store.to_vec())
}

async fn get_task(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let found = store.iter().find(|task| task.id.to_string() == id).cloned();
    if found.is_none() {
        log::debug!("task {id} not found");
    }
    found.map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_two_hundred_tasks() {
        let tasks = seed_tasks().unwrap();
        assert_eq!(tasks.len(), 200);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[0].user_id, 1);
        assert_eq!(tasks[0].title, "delectus aut autem");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn fixture_ids_are_unique_and_ordered() {
        let tasks = seed_tasks().unwrap();
        let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        let expected: Vec<u32> = (1..=200).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn task_serializes_with_wire_keys() {
        let task = Task {
            user_id: 2,
            id: 21,
            title: "Test".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["userId"], 2);
        assert_eq!(json["id"], 21);
        assert_eq!(json["completed"], true);
    }
}
