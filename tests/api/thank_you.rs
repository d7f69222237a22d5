use crate::helpers::{spawn_app, spawn_app_with, RecordingMailer, SENDER_EMAIL};
use serde_json::json;

#[tokio::test]
async fn thank_you_returns_200_and_thanks_the_submitter() {
    let app = spawn_app().await;

    let response = app
        .post_thank_you(json!({ "name": "Bob", "email": "bob@y.com" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert!(body.get("info").is_some());

    let sent = app.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from().as_ref(), SENDER_EMAIL);
    assert_eq!(sent[0].to().as_ref(), "bob@y.com");
    assert!(sent[0].body().contains("Bob"));
}

#[tokio::test]
async fn thank_you_returns_400_when_name_or_email_is_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({ "email": "bob@y.com" }), "missing the name"),
        (json!({ "name": "Bob" }), "missing the email"),
        (json!({ "name": "Bob", "email": "" }), "empty email"),
        (json!({ "name": null, "email": "bob@y.com" }), "null name"),
    ];

    for (body, description) in test_cases {
        let response = app.post_thank_you(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "status": "fail", "error": "Name and email are required." })
        );
    }

    assert!(app.sent_messages().is_empty());
}

#[tokio::test]
async fn thank_you_returns_500_when_the_transport_fails() {
    let app = spawn_app_with(RecordingMailer::failing("Invalid login: 535 Authentication failed")).await;

    let response = app
        .post_thank_you(json!({ "name": "Bob", "email": "bob@y.com" }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["error"], "Invalid login: 535 Authentication failed");
}

#[tokio::test]
async fn thank_you_does_not_depend_on_a_previous_submission() {
    let app = spawn_app().await;

    let response = app
        .post_thank_you(json!({ "name": "Bob", "email": "bob@y.com" }))
        .await;
    assert_eq!(200, response.status().as_u16());

    let response = app
        .post_send(json!({ "name": "Bob", "email": "bob@y.com", "message": "Hello again" }))
        .await;
    assert_eq!(200, response.status().as_u16());

    assert_eq!(app.sent_messages().len(), 2);
}
