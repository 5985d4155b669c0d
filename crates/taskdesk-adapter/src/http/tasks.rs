/*
[INPUT]:  User id and assignment request bodies
[OUTPUT]: Task lists and assignment confirmation
[POS]:    HTTP layer - task endpoints
[UPDATE]: When adding new task endpoints or changing payloads
*/

use crate::http::{Result, TaskdeskClient};
use crate::types::{AssignTaskRequest, UserIdRequest};
use serde::de::DeserializeOwned;

pub const RETRIEVE_TASKS: &str = "/api/retrieveTasks";
pub const RETRIEVE_ASSIGNED_TASKS: &str = "/api/retrieveAssignedTasks";
pub const ASSIGN_TASKS: &str = "/api/assignTasks";

impl TaskdeskClient {
    /// Tasks assigned to the user
    ///
    /// POST /api/retrieveTasks
    pub async fn retrieve_tasks<R: DeserializeOwned>(&self, req: &UserIdRequest) -> Result<Vec<R>> {
        self.endpoint(RETRIEVE_TASKS).post(req).await
    }

    /// Tasks the user has assigned to others
    ///
    /// POST /api/retrieveAssignedTasks
    pub async fn retrieve_assigned_tasks<R: DeserializeOwned>(
        &self,
        req: &UserIdRequest,
    ) -> Result<Vec<R>> {
        self.endpoint(RETRIEVE_ASSIGNED_TASKS).post(req).await
    }

    /// Create a new task assignment. The response body is not inspected.
    ///
    /// POST /api/assignTasks
    pub async fn assign_task(&self, req: &AssignTaskRequest) -> Result<()> {
        self.endpoint(ASSIGN_TASKS).post_ignore_body(req).await
    }
}
