//! Frontend Models
//!
//! Request/response bodies for the two server endpoints and the task status
//! values the task table uses.

use serde::{Deserialize, Serialize};

/// `GET /api/notifications/count`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationCount {
    pub count: i64,
}

/// `POST /api/task/{id}/status` body
#[derive(Debug, Serialize)]
pub struct StatusUpdate<'a> {
    pub status: &'a str,
}

/// `POST /api/task/{id}/status` reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusAck {
    #[serde(default)]
    pub ok: bool,
}

/// Task status as shown in the task table.
///
/// The server owns the value; anything outside the four known labels is kept
/// verbatim in `Unknown` and styled like `NotStarted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Complete,
    Blocked,
    Unknown(String),
}

impl TaskStatus {
    pub const KNOWN_LABELS: [&'static str; 4] = ["Not Started", "In Progress", "Complete", "Blocked"];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Not Started" => TaskStatus::NotStarted,
            "In Progress" => TaskStatus::InProgress,
            "Complete" => TaskStatus::Complete,
            "Blocked" => TaskStatus::Blocked,
            other => TaskStatus::Unknown(other.to_string()),
        }
    }

    /// Label sent to the server and shown in the badge
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
            TaskStatus::Blocked => "Blocked",
            TaskStatus::Unknown(label) => label,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "badge-not-started",
            TaskStatus::InProgress => "badge-in-progress",
            TaskStatus::Complete => "badge-complete",
            TaskStatus::Blocked => "badge-blocked",
            TaskStatus::Unknown(_) => "badge-not-started",
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, TaskStatus::Blocked)
    }
}
