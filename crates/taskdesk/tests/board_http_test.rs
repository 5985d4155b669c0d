/*
[INPUT]:  Task board wired to a real HTTP client and a mock backend
[OUTPUT]: End-to-end checks of list sync and assignment flow
[POS]:    Integration test layer - board over HTTP
[UPDATE]: When board behavior or endpoint payloads change
*/

use std::sync::Arc;

use serde_json::{Value, json};
use taskdesk::{ALL_FIELDS_REQUIRED, ActiveTab, AssignError, Assignee, Identity, RefreshOutcome, TaskBoard};
use taskdesk_adapter::{ClientConfig, TaskdeskClient};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn board_for(server: &MockServer) -> TaskBoard {
    let client = assert_ok!(TaskdeskClient::with_config_and_base_url(
        ClientConfig::default(),
        &server.uri()
    ));
    TaskBoard::new(Arc::new(client), Identity::new(3, "sam"))
}

async fn mount_list(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(json!({ "userId": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn requests_to(server: &MockServer, endpoint: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .into_iter()
        .filter(|request| request.url.path() == endpoint)
        .map(|request| serde_json::from_slice(&request.body).expect("JSON body"))
        .collect()
}

async fn fill_valid_draft(board: &TaskBoard) {
    board.open_assignment().await;
    board.set_task("Review").await;
    board.set_document_type("Invoice").await;
    board.set_assignee(Some(Assignee::new(7, "alex"))).await;
    board.set_description("check totals").await;
}

#[tokio::test]
async fn tab_switches_show_exactly_the_matching_endpoint_records() {
    let server = MockServer::start().await;
    let mine = json!([{ "id": 1, "taskName": "Review" }, { "id": 2, "taskName": "Approve" }]);
    let assigned = json!([{ "id": 9, "taskName": "Sign", "assignTo": { "userId": 7, "username": "alex" } }]);
    mount_list(&server, "/api/retrieveTasks", mine.clone()).await;
    mount_list(&server, "/api/retrieveAssignedTasks", assigned.clone()).await;
    let board = board_for(&server);

    assert_eq!(board.mount().await, RefreshOutcome::Applied { count: 2 });
    let view = board.view().await;
    assert_eq!(view.active_tab, ActiveTab::MyTasks);
    assert_eq!(serde_json::to_value(&view.tasks).unwrap(), mine);

    board.select_tab(ActiveTab::Assigned).await;
    let view = board.view().await;
    assert_eq!(serde_json::to_value(&view.tasks).unwrap(), assigned);

    board.select_tab(ActiveTab::MyTasks).await;

    assert_eq!(requests_to(&server, "/api/retrieveTasks").await.len(), 2);
    assert_eq!(requests_to(&server, "/api/retrieveAssignedTasks").await.len(), 1);
}

#[tokio::test]
async fn rows_saved_without_numeric_users_still_show() {
    let server = MockServer::start().await;
    let mine = json!([
        { "id": 1, "taskName": "Review", "assignTo": { "userId": 7, "username": "alex" } },
        { "id": 2, "taskName": "Draft", "assignTo": { "userId": "", "username": "" } },
        { "_id": "66a1f", "userId": "us-east-1:abc-123", "taskName": "Sign" },
        { "id": 4, "_id": "abc", "taskName": "File" }
    ]);
    mount_list(&server, "/api/retrieveTasks", mine.clone()).await;
    let board = board_for(&server);

    assert_eq!(board.mount().await, RefreshOutcome::Applied { count: 4 });

    let view = board.view().await;
    let names: Vec<_> = view.tasks.iter().map(|task| task.task_name.as_deref()).collect();
    assert_eq!(names, [Some("Review"), Some("Draft"), Some("Sign"), Some("File")]);
    assert_eq!(serde_json::to_value(&view.tasks).unwrap(), mine);
}

#[tokio::test]
async fn failed_fetch_leaves_list_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/retrieveTasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/retrieveTasks"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let board = board_for(&server);

    board.mount().await;
    assert_eq!(board.refresh_active().await, RefreshOutcome::Failed);

    assert_eq!(board.view().await.tasks.len(), 1);
}

#[tokio::test]
async fn valid_draft_posts_assignment_and_resets() {
    let server = MockServer::start().await;
    mount_list(&server, "/api/retrieveTasks", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/assignTasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;
    let board = board_for(&server);
    fill_valid_draft(&board).await;

    assert_ok!(board.submit_assignment().await);

    let sent = requests_to(&server, "/api/assignTasks").await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["assignTo"], json!({ "userId": 7, "username": "alex" }));
    assert_eq!(sent[0]["flag"], json!(true));
    assert_eq!(sent[0]["userId"], json!(3));
    assert_eq!(sent[0]["userName"], json!("sam"));

    let view = board.view().await;
    assert!(!view.assign_open);
    assert_eq!(view.draft.selected_task, "");
    assert_eq!(view.draft.selected_document_type, "");
    assert_eq!(view.draft.selected_assignee, None);
    assert_eq!(view.draft.description, "");
    assert_eq!(requests_to(&server, "/api/retrieveTasks").await.len(), 1);
}

#[tokio::test]
async fn missing_description_sets_message_and_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/assignTasks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let board = board_for(&server);
    fill_valid_draft(&board).await;
    board.set_description("").await;

    let err = board.submit_assignment().await.expect_err("incomplete draft");

    assert!(matches!(err, AssignError::Invalid(_)));
    assert_eq!(board.view().await.invalid_input.as_deref(), Some(ALL_FIELDS_REQUIRED));
}

#[tokio::test]
async fn transport_failure_keeps_draft_and_dialog() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/assignTasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let board = board_for(&server);
    fill_valid_draft(&board).await;
    let before = board.dialog().await.draft;

    let err = board.submit_assignment().await.expect_err("backend failure");

    assert!(matches!(err, AssignError::Backend(_)));
    let view = board.view().await;
    assert!(view.assign_open);
    assert_eq!(view.draft, before);
    assert!(view.submit_error.is_some());
    assert!(requests_to(&server, "/api/retrieveTasks").await.is_empty());
}

#[tokio::test]
async fn resubmitting_same_draft_posts_twice() {
    let server = MockServer::start().await;
    mount_list(&server, "/api/retrieveTasks", json!([])).await;
    Mock::given(method("POST"))
        .and(path("/api/assignTasks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    let board = board_for(&server);

    fill_valid_draft(&board).await;
    assert_ok!(board.submit_assignment().await);
    fill_valid_draft(&board).await;
    assert_ok!(board.submit_assignment().await);

    let sent = requests_to(&server, "/api/assignTasks").await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}
