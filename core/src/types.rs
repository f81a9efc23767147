//! Domain DTOs for the remote service and the export file.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Fields the reporter never reads (address, company, todo ids) are ignored
//! on deserialization. Integration tests catch schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};

/// An employee profile returned by `GET /users/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub name: String,
}

/// A single to-do item returned by `GET /todos?userId={id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// The renamed projection of a `TodoItem` written to the export file.
///
/// Field order is part of the file format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRecord {
    pub task: String,
    pub completed: bool,
    pub username: u64,
}

impl From<&TodoItem> for ExportRecord {
    fn from(item: &TodoItem) -> Self {
        Self {
            task: item.title.clone(),
            completed: item.completed,
            username: item.user_id,
        }
    }
}
