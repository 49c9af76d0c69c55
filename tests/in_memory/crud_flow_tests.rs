//! End-to-end create, edit and delete flows through the router.

use super::helpers::{
    CONFIRM_DELETE_FORM, TestApp, VALID_TASK_FORM, app, body_text, get, issued_cookie, post_form,
    redirect_target,
};
use axum::http::StatusCode;
use rstest::rstest;
use taskboard::task::{domain::TaskId, ports::TaskRepository};

#[rstest]
#[tokio::test]
async fn create_redirects_to_detail_with_one_time_flash(app: TestApp) {
    let response = app.send(post_form("/tasks/submit", VALID_TASK_FORM, None)).await;
    assert_eq!(redirect_target(&response), "/tasks/show/1");
    let cookie = issued_cookie(&response).expect("session cookie issued");

    let first = body_text(app.send(get("/tasks/show/1", Some(&cookie))).await).await;
    assert!(first.contains("The record was successfully created"));
    assert!(first.contains("Buy milk"));
    assert!(first.contains("Complete"));

    let second = body_text(app.send(get("/tasks/show/1", Some(&cookie))).await).await;
    assert!(!second.contains("The record was successfully created"));
}

#[rstest]
#[tokio::test]
async fn created_description_is_trimmed(app: TestApp) {
    app.send(post_form("/tasks/submit", VALID_TASK_FORM, None))
        .await;

    let task = app
        .repo
        .find_by_id(TaskId::new(1).expect("valid id"))
        .await
        .expect("lookup succeeds")
        .expect("task stored");
    assert_eq!(task.description(), "2%");
    assert!(task.is_complete());
}

#[rstest]
#[tokio::test]
async fn invalid_submission_rerenders_form_with_messages(app: TestApp) {
    let response = app
        .send(post_form(
            "/tasks/submit",
            "task_title=A&task_description=Valid+description&submit=Submit",
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Task Title field must be at least 2 characters in length."));
    assert!(body.contains("Valid description"));
    assert_eq!(app.repo_count().await, 0);
}

#[rstest]
#[tokio::test]
async fn submission_without_token_is_ignored(app: TestApp) {
    let response = app
        .send(post_form(
            "/tasks/submit",
            "task_title=Buy+milk&task_description=2%25",
            None,
        ))
        .await;

    assert_eq!(redirect_target(&response), "/tasks/manage");
    assert_eq!(app.repo_count().await, 0);
}

#[rstest]
#[tokio::test]
async fn unchecked_box_stores_incomplete_on_edit(app: TestApp) {
    app.send(post_form("/tasks/submit", VALID_TASK_FORM, None))
        .await;

    let response = app
        .send(post_form(
            "/tasks/submit/1",
            "task_title=Buy+oat+milk&task_description=Barista&submit=Submit",
            None,
        ))
        .await;
    assert_eq!(redirect_target(&response), "/tasks/show/1");
    let cookie = issued_cookie(&response).expect("session cookie issued");

    let body = body_text(app.send(get("/tasks/show/1", Some(&cookie))).await).await;
    assert!(body.contains("The record was successfully updated"));
    assert!(body.contains("Buy oat milk"));
    assert!(body.contains("Incomplete"));
}

#[rstest]
#[tokio::test]
async fn edit_form_is_prefilled(app: TestApp) {
    app.send(post_form("/tasks/submit", VALID_TASK_FORM, None))
        .await;

    let body = body_text(app.send(get("/tasks/create/1", None)).await).await;

    assert!(body.contains("Update Task Details"));
    assert!(body.contains("value=\"Buy milk\""));
}

#[rstest]
#[tokio::test]
async fn confirmed_delete_removes_record(app: TestApp) {
    app.seed(2).await;

    let confirm = body_text(app.send(get("/tasks/delete_conf/2", None)).await).await;
    assert!(confirm.contains("Yes - Delete Now"));

    let response = app
        .send(post_form("/tasks/submit_delete/2", CONFIRM_DELETE_FORM, None))
        .await;
    assert_eq!(redirect_target(&response), "/tasks/manage");
    let cookie = issued_cookie(&response).expect("session cookie issued");

    let list = body_text(app.send(get("/tasks/manage", Some(&cookie))).await).await;
    assert!(list.contains("The record was successfully deleted"));
    assert!(list.contains("Showing 1 to 1 of 1 results."));

    let gone = app.send(get("/tasks/show/2", None)).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn delete_without_confirmation_keeps_record(app: TestApp) {
    app.seed(1).await;

    let response = app
        .send(post_form("/tasks/submit_delete/1", "submit=Cancel", None))
        .await;

    assert_eq!(redirect_target(&response), "/tasks/manage");
    assert!(issued_cookie(&response).is_none());
    assert_eq!(app.repo_count().await, 1);
}

#[rstest]
#[tokio::test]
async fn delete_of_missing_record_redirects_quietly(app: TestApp) {
    let response = app
        .send(post_form("/tasks/submit_delete/999", CONFIRM_DELETE_FORM, None))
        .await;

    assert_eq!(redirect_target(&response), "/tasks/manage");
    assert!(issued_cookie(&response).is_none());
}
