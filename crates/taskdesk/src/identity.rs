/*
[INPUT]:  Signed-in user values from the login layer or configuration
[OUTPUT]: Identity value consumed by the task board
[POS]:    Domain layer - acting user
[UPDATE]: When the login layer exposes more user attributes
*/

use serde::{Deserialize, Serialize};

/// The acting user, as provided by whatever handles sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: String,
    /// Login flow finished and the values above can be trusted
    #[serde(default = "default_ready")]
    pub ready: bool,
}

impl Identity {
    pub fn new(user_id: i64, user_name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            user_name: user_name.into(),
            ready: true,
        }
    }

    /// No user signed in yet
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            user_name: String::new(),
            ready: false,
        }
    }

    /// Whether this identity may act on the backend
    pub fn can_act(&self) -> bool {
        self.ready && self.user_id.is_some()
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::anonymous()
    }
}

fn default_ready() -> bool {
    true
}
