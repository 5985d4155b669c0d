/*
[INPUT]:  Assignment draft held by the dialog and the acting identity
[OUTPUT]: Assignment posted to the backend, active list refreshed, dialog reset
[POS]:    Core layer - task assignment workflow
[UPDATE]: When submission rules or post-submit behavior change
*/

use taskdesk_adapter::TaskdeskError;
use thiserror::Error;
use tracing::{error, info, warn};

use super::{AssignmentDialog, TaskBoard};
use crate::draft::ValidationError;

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("assignment dialog is not open")]
    DialogClosed,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("no signed-in user to assign from")]
    MissingIdentity,

    #[error("failed to assign task: {0}")]
    Backend(#[from] TaskdeskError),
}

impl TaskBoard {
    /// Validate the draft and post it as a new assignment.
    ///
    /// Nothing is sent unless the draft is complete and the identity can act.
    /// Each successful call creates one assignment; identical drafts are not
    /// deduplicated.
    pub async fn submit_assignment(&self) -> Result<(), AssignError> {
        let request = {
            let mut state = self.state.lock().await;
            if !state.dialog.open {
                return Err(AssignError::DialogClosed);
            }

            let valid = match state.dialog.draft.validate() {
                Ok(valid) => valid,
                Err(err) => {
                    warn!(error = ?err, "assignment draft incomplete");
                    state.dialog.invalid_input = Some(err.to_string());
                    return Err(err.into());
                }
            };

            if !state.identity.can_act() {
                let err = AssignError::MissingIdentity;
                warn!("assignment attempted without a ready identity");
                state.dialog.last_error = Some(err.to_string());
                return Err(err);
            }

            state.dialog.last_error = None;
            valid.to_request(&state.identity)
        };

        if let Err(err) = self.backend.assign_task(&request).await {
            error!(error = %err, task = %request.task_name, "failed to assign task");
            let err = AssignError::from(err);
            self.state.lock().await.dialog.last_error = Some(err.to_string());
            return Err(err);
        }

        info!(
            task = %request.task_name,
            document_type = %request.document_type,
            assignee = request.assign_to.user_id,
            "task assigned"
        );
        self.state.lock().await.dialog = AssignmentDialog::default();
        self.refresh_active().await;
        Ok(())
    }
}
