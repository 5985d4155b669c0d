/*
[INPUT]:  Tab labels from the shell or CLI arguments
[OUTPUT]: ActiveTab enum mapped to its list endpoint
[POS]:    Domain layer - task list view selection
[UPDATE]: When adding a new task list view
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskdesk_adapter::{RETRIEVE_ASSIGNED_TASKS, RETRIEVE_TASKS};
use thiserror::Error;

/// Which task list is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveTab {
    /// Tasks assigned to the user
    #[default]
    #[serde(rename = "My Tasks")]
    MyTasks,
    /// Tasks the user assigned to others
    #[serde(rename = "Assigned")]
    Assigned,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 2] = [ActiveTab::MyTasks, ActiveTab::Assigned];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::MyTasks => "My Tasks",
            ActiveTab::Assigned => "Assigned",
        }
    }

    /// Endpoint serving this tab's list
    pub fn endpoint(self) -> &'static str {
        match self {
            ActiveTab::MyTasks => RETRIEVE_TASKS,
            ActiveTab::Assigned => RETRIEVE_ASSIGNED_TASKS,
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}', expected 'my' or 'assigned'")]
pub struct ParseTabError(String);

impl FromStr for ActiveTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "my tasks" | "my-tasks" | "my" | "mine" => Ok(ActiveTab::MyTasks),
            "assigned" => Ok(ActiveTab::Assigned),
            _ => Err(ParseTabError(s.to_string())),
        }
    }
}
