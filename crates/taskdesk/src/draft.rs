/*
[INPUT]:  Assignment form field values
[OUTPUT]: Validated assignment ready to be turned into a request
[POS]:    Domain layer - assignment draft and validation rules
[UPDATE]: When assignment form fields or validation rules change
*/

use serde::{Deserialize, Serialize};
use taskdesk_adapter::{AssignTaskRequest, AssignTo};
use thiserror::Error;

use crate::identity::Identity;

/// Inline message shown when any draft field is missing
pub const ALL_FIELDS_REQUIRED: &str = "All Fields Required";

/// User picked as the target of an assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub user_id: i64,
    pub username: String,
}

impl Assignee {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

impl From<&Assignee> for AssignTo {
    fn from(assignee: &Assignee) -> Self {
        AssignTo {
            user_id: assignee.user_id,
            username: assignee.username.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Task,
    DocumentType,
    Assignee,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All Fields Required")]
    MissingFields { missing: Vec<DraftField> },
}

/// In-progress assignment form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub selected_task: String,
    pub selected_document_type: String,
    pub selected_assignee: Option<Assignee>,
    pub description: String,
}

/// Draft that passed validation; every field is present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAssignment {
    pub task_name: String,
    pub document_type: String,
    pub assignee: Assignee,
    pub description: String,
}

impl AssignmentDraft {
    /// All four fields must be filled; blank text counts as missing.
    pub fn validate(&self) -> Result<ValidAssignment, ValidationError> {
        let mut missing = Vec::new();
        if self.selected_task.trim().is_empty() {
            missing.push(DraftField::Task);
        }
        if self.selected_document_type.trim().is_empty() {
            missing.push(DraftField::DocumentType);
        }
        if self.selected_assignee.is_none() {
            missing.push(DraftField::Assignee);
        }
        if self.description.trim().is_empty() {
            missing.push(DraftField::Description);
        }

        match &self.selected_assignee {
            Some(assignee) if missing.is_empty() => Ok(ValidAssignment {
                task_name: self.selected_task.clone(),
                document_type: self.selected_document_type.clone(),
                assignee: assignee.clone(),
                description: self.description.clone(),
            }),
            _ => Err(ValidationError::MissingFields { missing }),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ValidAssignment {
    /// Request body sent on behalf of `identity`
    pub fn to_request(&self, identity: &Identity) -> AssignTaskRequest {
        AssignTaskRequest::new(
            identity.user_id,
            identity.user_name.clone(),
            self.task_name.clone(),
            self.document_type.clone(),
            AssignTo::from(&self.assignee),
            self.description.clone(),
        )
    }
}
