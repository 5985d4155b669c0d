/*
[INPUT]:  Public API exports for taskdesk crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod backend;
pub mod board;
pub mod config;
pub mod draft;
pub mod identity;
pub mod nav;
pub mod tab;

// Re-export main types for convenience
pub use backend::TaskBackend;
pub use board::{AssignError, AssignmentDialog, BoardView, RefreshOutcome, TaskBoard};
pub use config::TaskdeskConfig;
pub use draft::{ALL_FIELDS_REQUIRED, Assignee, AssignmentDraft, DraftField, ValidAssignment, ValidationError};
pub use identity::Identity;
pub use nav::{NavItem, nav_items};
pub use tab::ActiveTab;
