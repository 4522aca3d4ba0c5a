use signup::mail::InMemoryMailProvider;
use signup::repository::UsersRepository;

use crate::helpers::{spawn_app, spawn_app_with_mail};

#[tokio::test]
async fn create_user_returns_a_201_and_sends_a_welcome_email_for_valid_data() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
    });

    let resp = app.post_users(body).await;

    assert_eq!(201, resp.status().as_u16());

    let saved = app.users.stored_users().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name.as_ref(), "Ana");
    assert_eq!(saved[0].email.as_ref(), "ana@example.com");

    let sent = app.mail.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.name, "Ana");
    assert_eq!(sent[0].to.email, "ana@example.com");
    assert_eq!(sent[0].subject, "Seja bem-vindo à plataforma");
}

#[tokio::test]
async fn create_user_returns_a_409_when_the_email_is_already_registered() {
    let app = spawn_app().await;

    let body = serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
    });

    let resp = app.post_users(body.clone()).await;
    assert_eq!(201, resp.status().as_u16());

    let resp = app.post_users(body).await;
    assert_eq!(409, resp.status().as_u16());

    // still exactly one record, and no second welcome email.
    assert_eq!(app.users.stored_users().await.len(), 1);
    assert_eq!(app.mail.sent_messages().await.len(), 1);
}

#[tokio::test]
async fn create_user_returns_a_400_when_data_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({ "name": "Ana" }), "missing the email"),
        (serde_json::json!({ "email": "ana@example.com" }), "missing the name"),
        (serde_json::json!({}), "missing both name and email"),
    ];

    for (invalid_body, err_message) in test_cases {
        let resp = app.post_users(invalid_body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "the api did not fail with 400 bad request for a payload {}",
            err_message
        )
    }
}

#[tokio::test]
async fn create_user_returns_a_400_when_fields_are_present_but_invalid() {
    let app = spawn_app().await;

    let test_cases = vec![
        (
            serde_json::json!({ "name": "", "email": "ana@example.com" }),
            "empty name",
        ),
        (
            serde_json::json!({ "name": "Ana", "email": "" }),
            "empty email",
        ),
        (
            serde_json::json!({ "name": "Ana", "email": "not-an-email" }),
            "invalid email",
        ),
    ];

    for (body, desc) in test_cases {
        let resp = app.post_users(body).await;

        assert_eq!(
            400,
            resp.status().as_u16(),
            "the api did not reject a payload with {}",
            desc
        )
    }
}

#[tokio::test]
async fn a_failed_welcome_email_surfaces_an_error_but_keeps_the_user() {
    let app = spawn_app_with_mail(InMemoryMailProvider::rejecting()).await;

    let body = serde_json::json!({
        "name": "Ana",
        "email": "ana@example.com",
    });

    let resp = app.post_users(body).await;

    assert_eq!(500, resp.status().as_u16());

    let email = signup::domain::UserEmail::parse("ana@example.com".to_string())
        .unwrap();
    let saved = app
        .users
        .find_by_email(&email)
        .await
        .expect("the lookup should not fail");
    assert!(saved.is_some(), "the user should persist after a failed send");
}
