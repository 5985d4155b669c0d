/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;


/// Backend task identifier; numeric or document-style string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(id) => write!(f, "{id}"),
            TaskId::Text(id) => f.write_str(id),
        }
    }
}

/// User id as stored on a task row.
///
/// Rows written without a selected user carry `""`, and some backends key
/// users by opaque strings, so the raw value is kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserKey {
    Number(i64),
    Text(String),
}

impl UserKey {
    /// Numeric id, accepting numeric strings
    pub fn as_number(&self) -> Option<i64> {
        match self {
            UserKey::Number(id) => Some(*id),
            UserKey::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, UserKey::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::Number(id) => write!(f, "{id}"),
            UserKey::Text(id) => f.write_str(id),
        }
    }
}

/// Assignee as stored on a task row; either part may be blank or absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignee {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl TaskAssignee {
    /// Display name, `None` when the row was saved without an assignee
    pub fn name(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// One row of a task list.
///
/// Known fields mirror the assignment payload; anything else the backend
/// sends is kept in `extra` so records survive a round trip unchanged.
/// Document-style `_id` keys land in `extra` as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<TaskAssignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskRecord {
    /// Row identifier, falling back to a document-style `_id`
    pub fn key(&self) -> Option<String> {
        if let Some(id) = &self.id {
            return Some(id.to_string());
        }
        match self.extra.get("_id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
