use crate::helpers::{spawn_app, spawn_app_with, RecordingMailer, RECEIVER_EMAIL, SENDER_EMAIL};
use serde_json::json;

#[tokio::test]
async fn send_returns_200_and_relays_a_valid_submission() {
    let app = spawn_app().await;

    let response = app
        .post_send(json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert!(body.get("info").is_some());
    assert_eq!(body["info"]["accepted"], json!([RECEIVER_EMAIL]));

    let sent = app.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from().as_ref(), SENDER_EMAIL);
    assert_eq!(sent[0].to().as_ref(), RECEIVER_EMAIL);
    assert!(sent[0].subject().contains("Alice"));
    assert!(sent[0].subject().contains("a@x.com"));
    assert!(sent[0].body().contains("Hi"));
}

#[tokio::test]
async fn send_returns_400_when_fields_are_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (json!({ "email": "a@x.com", "message": "Hi" }), "missing the name"),
        (json!({ "name": "Alice", "message": "Hi" }), "missing the email"),
        (json!({ "name": "Alice", "email": "a@x.com" }), "missing the message"),
        (json!({ "name": "", "email": "a@x.com", "message": "Hi" }), "empty name"),
        (json!({ "name": "Alice", "email": "a@x.com", "message": "   " }), "blank message"),
        (json!({}), "missing everything"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({ "status": "fail", "error": "All fields are required." })
        );
    }

    assert!(
        app.sent_messages().is_empty(),
        "Invalid submissions must never reach the mail transport."
    );
}

#[tokio::test]
async fn send_returns_500_when_the_transport_fails() {
    let app = spawn_app_with(RecordingMailer::failing("relay unreachable")).await;

    let response = app
        .post_send(json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "fail", "error": "relay unreachable" })
    );
    assert_eq!(app.sent_messages().len(), 1);
}

#[tokio::test]
async fn send_does_not_deduplicate_identical_submissions() {
    let app = spawn_app().await;
    let payload = json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" });

    for _ in 0..2 {
        let response = app.post_send(payload.clone()).await;
        assert_eq!(200, response.status().as_u16());
    }

    assert_eq!(app.sent_messages().len(), 2);
}

#[tokio::test]
async fn send_accepts_any_non_empty_email() {
    let app = spawn_app().await;

    let response = app
        .post_send(json!({ "name": "Alice", "email": "not-an-email", "message": "Hi" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    assert!(app.sent_messages()[0].subject().contains("not-an-email"));
}

#[tokio::test]
async fn send_returns_400_for_malformed_json() {
    let app = spawn_app().await;

    let response = app.post_raw("/api/send", "{ \"name\": ").await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["error"].is_string());
    assert!(app.sent_messages().is_empty());
}

#[tokio::test]
async fn send_accepts_long_messages() {
    let app = spawn_app().await;
    let message = "A long story. ".repeat(5_000);

    let response = app
        .post_send(json!({ "name": "Alice", "email": "a@x.com", "message": message }))
        .await;

    assert_eq!(200, response.status().as_u16());
    assert!(app.sent_messages()[0].body().contains(&message));
}
