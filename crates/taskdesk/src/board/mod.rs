/*
[INPUT]:  Task backend, acting identity, shell events (tab, form fields, dialog)
[OUTPUT]: Task list state and view snapshots for the presentation shell
[POS]:    Core layer - Tasks page view-model
[UPDATE]: When the page gains new state or handlers
*/

mod assign;
mod sync;

pub use assign::AssignError;
pub use sync::RefreshOutcome;

use std::sync::Arc;
use taskdesk_adapter::TaskRecord;
use tokio::sync::Mutex;
use tracing::debug;

use crate::backend::TaskBackend;
use crate::draft::{Assignee, AssignmentDraft};
use crate::identity::Identity;
use crate::tab::ActiveTab;

/// Assignment dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentDialog {
    pub open: bool,
    pub draft: AssignmentDraft,
    /// Inline validation message
    pub invalid_input: Option<String>,
    /// Last submission failure, kept until the next submit
    pub last_error: Option<String>,
}

/// Everything the presentation shell renders
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub active_tab: ActiveTab,
    /// Records of the active tab only
    pub tasks: Vec<TaskRecord>,
    pub assign_open: bool,
    pub draft: AssignmentDraft,
    pub invalid_input: Option<String>,
    pub submit_error: Option<String>,
}

/// Records of one tab plus the newest fetch ticket issued for it
#[derive(Debug, Default)]
struct TaskList {
    records: Vec<TaskRecord>,
    issued: u64,
}

impl TaskList {
    fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the records unless a newer fetch has been issued since `seq`
    fn apply(&mut self, seq: u64, records: Vec<TaskRecord>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.records = records;
        true
    }
}

#[derive(Debug, Default)]
struct BoardState {
    identity: Identity,
    active_tab: ActiveTab,
    my_tasks: TaskList,
    assigned_tasks: TaskList,
    dialog: AssignmentDialog,
}

impl BoardState {
    fn list(&self, tab: ActiveTab) -> &TaskList {
        match tab {
            ActiveTab::MyTasks => &self.my_tasks,
            ActiveTab::Assigned => &self.assigned_tasks,
        }
    }

    fn list_mut(&mut self, tab: ActiveTab) -> &mut TaskList {
        match tab {
            ActiveTab::MyTasks => &mut self.my_tasks,
            ActiveTab::Assigned => &mut self.assigned_tasks,
        }
    }
}

/// View-model behind the Tasks page.
///
/// Clones share state. The lock is never held across a backend call.
#[derive(Clone)]
pub struct TaskBoard {
    backend: Arc<dyn TaskBackend>,
    state: Arc<Mutex<BoardState>>,
}

impl TaskBoard {
    pub fn new(backend: Arc<dyn TaskBackend>, identity: Identity) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(BoardState {
                identity,
                ..BoardState::default()
            })),
        }
    }

    pub async fn identity(&self) -> Identity {
        self.state.lock().await.identity.clone()
    }

    /// Swap the acting user, e.g. after the login layer finishes
    pub async fn set_identity(&self, identity: Identity) {
        self.state.lock().await.identity = identity;
    }

    pub async fn active_tab(&self) -> ActiveTab {
        self.state.lock().await.active_tab
    }

    /// Records currently held for `tab`, visible or not
    pub async fn tasks(&self, tab: ActiveTab) -> Vec<TaskRecord> {
        self.state.lock().await.list(tab).records.clone()
    }

    pub async fn view(&self) -> BoardView {
        let state = self.state.lock().await;
        BoardView {
            active_tab: state.active_tab,
            tasks: state.list(state.active_tab).records.clone(),
            assign_open: state.dialog.open,
            draft: state.dialog.draft.clone(),
            invalid_input: state.dialog.invalid_input.clone(),
            submit_error: state.dialog.last_error.clone(),
        }
    }

    pub async fn dialog(&self) -> AssignmentDialog {
        self.state.lock().await.dialog.clone()
    }

    pub async fn open_assignment(&self) {
        let mut state = self.state.lock().await;
        state.dialog.open = true;
        debug!("assignment dialog opened");
    }

    /// Close the dialog without submitting; the draft is discarded
    pub async fn cancel_assignment(&self) {
        let mut state = self.state.lock().await;
        state.dialog = AssignmentDialog::default();
        debug!("assignment dialog cancelled");
    }

    pub async fn set_task(&self, task: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.dialog.draft.selected_task = task.into();
        state.dialog.invalid_input = None;
    }

    pub async fn set_document_type(&self, document_type: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.dialog.draft.selected_document_type = document_type.into();
        state.dialog.invalid_input = None;
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.dialog.draft.description = description.into();
        state.dialog.invalid_input = None;
    }

    pub async fn set_assignee(&self, assignee: Option<Assignee>) {
        self.state.lock().await.dialog.draft.selected_assignee = assignee;
    }
}
