//! Frontend Models
//!
//! Data structures matching the to-do service payloads.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned to-do identifier
pub type TodoId = String;

/// Completion status of a to-do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    Active,
    Completed,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 2] = [TodoStatus::Active, TodoStatus::Completed];

    /// Wire representation (`ACTIVE` / `COMPLETED`)
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Active => "ACTIVE",
            TodoStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::Active => "Active",
            TodoStatus::Completed => "Completed",
        }
    }

    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Active => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Active,
        }
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(TodoStatus::Active),
            "COMPLETED" => Ok(TodoStatus::Completed),
            other => Err(format!("unknown todo status: {other}")),
        }
    }
}

/// To-do data structure (matches service payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    pub status: TodoStatus,
}

impl Todo {
    /// Separate the immutable id from the editable fields
    pub fn split(self) -> (TodoId, TodoPatch) {
        let patch = TodoPatch {
            content: Some(self.content),
            status: Some(self.status),
        };
        (self.id, patch)
    }

    /// Shallow-merge the present fields of `patch`; id is never touched
    pub fn merge(&mut self, patch: &TodoPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Partial to-do without id, used for updates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn status(status: TodoStatus) -> Self {
        Self {
            content: None,
            status: Some(status),
        }
    }
}
