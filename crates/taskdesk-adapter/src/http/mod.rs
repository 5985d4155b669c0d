/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod endpoint;
pub mod error;
pub mod tasks;

pub use error::{Result, TaskdeskError};

pub use client::{ClientConfig, TaskdeskClient};
pub use endpoint::Endpoint;
pub use tasks::{ASSIGN_TASKS, RETRIEVE_ASSIGNED_TASKS, RETRIEVE_TASKS};
