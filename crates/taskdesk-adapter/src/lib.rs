/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Taskdesk adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Endpoint,
    Result,
    TaskdeskClient,
    TaskdeskError,
    ASSIGN_TASKS,
    RETRIEVE_ASSIGNED_TASKS,
    RETRIEVE_TASKS,
};

// Re-export all types
pub use types::*;
