/*
[INPUT]:  Tab activations and refresh requests
[OUTPUT]: Task lists replaced from backend responses
[POS]:    Core layer - task list synchronization
[UPDATE]: When list refresh triggers or stale-response handling change
*/

use taskdesk_adapter::UserIdRequest;
use tracing::{debug, error, info};

use super::TaskBoard;
use crate::tab::ActiveTab;

/// What happened to one list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Response replaced the list
    Applied { count: usize },
    /// A newer fetch for the same list was issued first; response dropped
    Stale,
    /// Request failed; list left as it was
    Failed,
}

impl TaskBoard {
    /// First activation of the page: load the default tab
    pub async fn mount(&self) -> RefreshOutcome {
        self.refresh_active().await
    }

    /// Switch tabs. Only an actual change fetches, and it fetches the new tab.
    pub async fn select_tab(&self, tab: ActiveTab) -> Option<RefreshOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.active_tab == tab {
                debug!(%tab, "tab already active");
                return None;
            }
            state.active_tab = tab;
        }
        Some(self.refresh(tab).await)
    }

    pub async fn refresh_active(&self) -> RefreshOutcome {
        let tab = self.active_tab().await;
        self.refresh(tab).await
    }

    pub async fn refresh_my_tasks(&self) -> RefreshOutcome {
        self.refresh(ActiveTab::MyTasks).await
    }

    pub async fn refresh_assigned_tasks(&self) -> RefreshOutcome {
        self.refresh(ActiveTab::Assigned).await
    }

    async fn refresh(&self, tab: ActiveTab) -> RefreshOutcome {
        let (seq, request) = {
            let mut state = self.state.lock().await;
            let seq = state.list_mut(tab).issue();
            (seq, UserIdRequest::new(state.identity.user_id))
        };
        debug!(%tab, seq, endpoint = tab.endpoint(), "fetching tasks");

        let result = match tab {
            ActiveTab::MyTasks => self.backend.retrieve_tasks(&request).await,
            ActiveTab::Assigned => self.backend.retrieve_assigned_tasks(&request).await,
        };

        match result {
            Ok(records) => {
                let count = records.len();
                let mut state = self.state.lock().await;
                if state.list_mut(tab).apply(seq, records) {
                    info!(%tab, seq, count, "task list refreshed");
                    RefreshOutcome::Applied { count }
                } else {
                    debug!(%tab, seq, "discarding stale task list response");
                    RefreshOutcome::Stale
                }
            }
            Err(err) => {
                error!(%tab, seq, error = %err, "failed to fetch tasks");
                RefreshOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::oneshot;

    use crate::board::testing::{FakeBackend, GatedBackend, record};
    use crate::board::{RefreshOutcome, TaskBoard};
    use crate::identity::Identity;
    use crate::tab::ActiveTab;

    fn fake_with_lists() -> Arc<FakeBackend> {
        let backend = FakeBackend::default();
        *backend.my_tasks.lock().unwrap() = vec![record(1, "Review"), record(2, "Approve")];
        *backend.assigned_tasks.lock().unwrap() = vec![record(9, "Sign")];
        Arc::new(backend)
    }

    #[tokio::test]
    async fn test_mount_fetches_default_tab_once() {
        let backend = fake_with_lists();
        let board = TaskBoard::new(backend.clone(), Identity::new(3, "sam"));

        assert_eq!(board.mount().await, RefreshOutcome::Applied { count: 2 });
        assert_eq!(backend.fetch_tabs(), vec![ActiveTab::MyTasks]);
        assert_eq!(board.view().await.tasks, backend.my_tasks.lock().unwrap().clone());
    }

    #[tokio::test]
    async fn test_each_tab_change_fetches_exactly_once() {
        let backend = fake_with_lists();
        let board = TaskBoard::new(backend.clone(), Identity::new(3, "sam"));
        board.mount().await;

        assert!(board.select_tab(ActiveTab::Assigned).await.is_some());
        assert!(board.select_tab(ActiveTab::MyTasks).await.is_some());
        assert!(board.select_tab(ActiveTab::MyTasks).await.is_none());
        assert!(board.select_tab(ActiveTab::Assigned).await.is_some());

        assert_eq!(
            backend.fetch_tabs(),
            vec![
                ActiveTab::MyTasks,
                ActiveTab::Assigned,
                ActiveTab::MyTasks,
                ActiveTab::Assigned,
            ]
        );
        let view = board.view().await;
        assert_eq!(view.active_tab, ActiveTab::Assigned);
        assert_eq!(view.tasks, vec![record(9, "Sign")]);
    }

    #[tokio::test]
    async fn test_missing_user_id_is_sent_blank() {
        let backend = fake_with_lists();
        let board = TaskBoard::new(backend.clone(), Identity::anonymous());
        board.mount().await;

        let fetches = backend.fetches.lock().unwrap();
        assert_eq!(fetches[0].1.user_id, None);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_list() {
        let backend = fake_with_lists();
        let board = TaskBoard::new(backend.clone(), Identity::new(3, "sam"));
        board.mount().await;

        *backend.fail_fetch.lock().unwrap() = true;
        assert_eq!(board.refresh_my_tasks().await, RefreshOutcome::Failed);

        assert_eq!(board.view().await.tasks.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_of_hidden_list_does_not_change_view() {
        let backend = fake_with_lists();
        let board = TaskBoard::new(backend.clone(), Identity::new(3, "sam"));

        board.refresh_assigned_tasks().await;

        assert!(board.view().await.tasks.is_empty());
        assert_eq!(board.tasks(ActiveTab::Assigned).await, vec![record(9, "Sign")]);
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer_list() {
        let backend = Arc::new(GatedBackend::default());
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        backend.gates.lock().unwrap().extend([older_rx, newer_rx]);
        let board = TaskBoard::new(backend, Identity::new(3, "sam"));

        let release = async {
            newer_tx.send(vec![record(2, "newer")]).unwrap();
            tokio::task::yield_now().await;
            older_tx.send(vec![record(1, "older")]).unwrap();
        };
        let (older, newer, ()) =
            tokio::join!(board.refresh_my_tasks(), board.refresh_my_tasks(), release);

        assert_eq!(older, RefreshOutcome::Stale);
        assert_eq!(newer, RefreshOutcome::Applied { count: 1 });
        assert_eq!(board.view().await.tasks, vec![record(2, "newer")]);
    }
}
