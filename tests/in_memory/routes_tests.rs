//! Route-level tests for listing, not-found handling and the admin gate.

use super::helpers::{
    TestApp, app, body_text, get, get_with_token, issued_cookie, post_form, redirect_target,
};
use axum::http::StatusCode;
use axum::http::header::WWW_AUTHENTICATE;
use rstest::rstest;
use std::time::Duration;
use taskboard::session::adapters::InMemorySessionStore;
use taskboard::web::AdminGate;

#[rstest]
#[tokio::test]
async fn empty_list_renders(app: TestApp) {
    let response = app.send(get("/tasks/manage", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Manage Tasks"));
    assert!(body.contains("No records found."));
}

#[rstest]
#[tokio::test]
async fn module_root_lists_tasks(app: TestApp) {
    app.seed(3).await;

    let response = app.send(get("/tasks", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Showing 1 to 3 of 3 results."));
    assert!(body.contains("Task 3"));
}

#[rstest]
#[tokio::test]
async fn list_defaults_to_twenty_rows_per_page(app: TestApp) {
    app.seed(45).await;

    let body = body_text(app.send(get("/tasks/manage/2", None)).await).await;

    assert!(body.contains("Showing 21 to 40 of 45 results."));
}

#[rstest]
#[tokio::test]
async fn malformed_page_number_shows_first_page(app: TestApp) {
    app.seed(25).await;

    let body = body_text(app.send(get("/tasks/manage/zero", None)).await).await;

    assert!(body.contains("Showing 1 to 20 of 25 results."));
}

#[rstest]
#[tokio::test]
async fn chosen_page_size_applies_to_later_lists(app: TestApp) {
    app.seed(60).await;

    let response = app.send(get("/tasks/set_per_page/2", None)).await;
    assert_eq!(redirect_target(&response), "/tasks/manage");
    let cookie = issued_cookie(&response).expect("session cookie issued");

    let body = body_text(app.send(get("/tasks/manage", Some(&cookie))).await).await;
    assert!(body.contains("Showing 1 to 50 of 60 results."));
    assert!(body.contains("<strong>50</strong>"));
}

#[rstest]
#[tokio::test]
async fn out_of_range_page_size_falls_back_to_default(app: TestApp) {
    app.seed(30).await;

    let response = app.send(get("/tasks/set_per_page/9", None)).await;
    let cookie = issued_cookie(&response).expect("session cookie issued");

    let body = body_text(app.send(get("/tasks/manage", Some(&cookie))).await).await;
    assert!(body.contains("Showing 1 to 20 of 30 results."));
}

#[rstest]
#[tokio::test]
async fn cookieless_clients_cannot_grow_session_store_without_bound() {
    let store = InMemorySessionStore::with_limits(Duration::from_secs(3600), 50);
    let app = TestApp::with_sessions(AdminGate::open(), store);

    for _ in 0..500 {
        let response = app.send(get("/tasks/set_per_page/2", None)).await;
        assert_eq!(redirect_target(&response), "/tasks/manage");
    }

    let held = app.sessions.session_count().expect("count succeeds");
    assert_eq!(held, 50);
}

#[rstest]
#[case("/tasks/show/999")]
#[case("/tasks/show/0")]
#[case("/tasks/show/abc")]
#[case("/tasks/create/999")]
#[case("/tasks/delete_conf/999")]
#[tokio::test]
async fn unknown_records_render_not_found(app: TestApp, #[case] uri: &str) {
    let response = app.send(get(uri, None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Record Not Found"));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_record_renders_not_found(app: TestApp) {
    let response = app
        .send(post_form(
            "/tasks/submit/77",
            "task_title=Valid&task_description=Valid&submit=Submit",
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn invalid_update_of_missing_record_renders_not_found(app: TestApp) {
    let response = app
        .send(post_form(
            "/tasks/submit/999",
            "task_title=A&task_description=x&submit=Submit",
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Record Not Found"));
}

#[rstest]
#[tokio::test]
async fn admin_gate_rejects_missing_or_wrong_token() {
    let app = TestApp::with_gate(AdminGate::with_token("s3cret"));

    let anonymous = app.send(get("/tasks/manage", None)).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        anonymous
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok()),
        Some("Bearer")
    );

    let wrong = app.send(get_with_token("/tasks/manage", "guess")).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[tokio::test]
async fn admin_gate_admits_configured_token() {
    let app = TestApp::with_gate(AdminGate::with_token("s3cret"));

    let response = app.send(get_with_token("/tasks/manage", "s3cret")).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn admin_gate_covers_write_routes() {
    let app = TestApp::with_gate(AdminGate::with_token("s3cret"));

    let response = app
        .send(post_form(
            "/tasks/submit",
            "task_title=Sneaky&task_description=Write&submit=Submit",
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.repo_count().await, 0);
}
