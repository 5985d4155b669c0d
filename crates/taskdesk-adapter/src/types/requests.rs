/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::serde_helpers::{deserialize_user_id, serialize_user_id};

/// Body of the list endpoints. A missing id is sent as `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdRequest {
    #[serde(
        rename = "userId",
        default,
        serialize_with = "serialize_user_id",
        deserialize_with = "deserialize_user_id"
    )]
    pub user_id: Option<i64>,
}

impl UserIdRequest {
    pub fn new(user_id: Option<i64>) -> Self {
        Self { user_id }
    }
}

/// Target user of an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignTo {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    #[serde(
        default,
        serialize_with = "serialize_user_id",
        deserialize_with = "deserialize_user_id"
    )]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub task_name: String,
    pub document_type: String,
    pub assign_to: AssignTo,
    pub description: String,
    /// Always `true` on requests built by this crate
    pub flag: bool,
}

impl AssignTaskRequest {
    pub fn new(
        user_id: Option<i64>,
        user_name: impl Into<String>,
        task_name: impl Into<String>,
        document_type: impl Into<String>,
        assign_to: AssignTo,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            task_name: task_name.into(),
            document_type: document_type.into(),
            assign_to,
            description: description.into(),
            flag: true,
        }
    }
}
