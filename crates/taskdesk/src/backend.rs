/*
[INPUT]:  Task list and assignment requests from the board
[OUTPUT]: Backend results through a swappable trait object
[POS]:    Seam between the task board and the HTTP adapter
[UPDATE]: When the board needs a new backend call
*/

use async_trait::async_trait;
use taskdesk_adapter::{AssignTaskRequest, Result, TaskRecord, TaskdeskClient, UserIdRequest};

/// Backend calls the task board depends on
#[async_trait]
pub trait TaskBackend: Send + Sync {
    async fn retrieve_tasks(&self, request: &UserIdRequest) -> Result<Vec<TaskRecord>>;

    async fn retrieve_assigned_tasks(&self, request: &UserIdRequest) -> Result<Vec<TaskRecord>>;

    async fn assign_task(&self, request: &AssignTaskRequest) -> Result<()>;
}

#[async_trait]
impl TaskBackend for TaskdeskClient {
    async fn retrieve_tasks(&self, request: &UserIdRequest) -> Result<Vec<TaskRecord>> {
        TaskdeskClient::retrieve_tasks(self, request).await
    }

    async fn retrieve_assigned_tasks(&self, request: &UserIdRequest) -> Result<Vec<TaskRecord>> {
        TaskdeskClient::retrieve_assigned_tasks(self, request).await
    }

    async fn assign_task(&self, request: &AssignTaskRequest) -> Result<()> {
        TaskdeskClient::assign_task(self, request).await
    }
}
