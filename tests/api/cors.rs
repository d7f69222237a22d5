use crate::helpers::spawn_app;
use serde_json::json;

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = spawn_app().await;

    let response = app
        .post_send(json!({ "name": "Alice", "email": "a@x.com", "message": "Hi" }))
        .await;

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn preflight_requests_are_answered() {
    let app = spawn_app().await;

    for path in ["/api/send", "/api/thankyou"] {
        let response = reqwest::Client::new()
            .request(reqwest::Method::OPTIONS, &format!("{}{}", &app.address, path))
            .header("Origin", "https://example.org")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(204, response.status().as_u16());
        assert!(response
            .headers()
            .get("access-control-allow-methods")
            .is_some());
    }

    assert!(app.sent_messages().is_empty());
}

#[tokio::test]
async fn preflight_allows_the_requested_headers() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/send", &app.address),
        )
        .header("Origin", "https://example.org")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,x-requested-with")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(204, response.status().as_u16());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-headers")
            .and_then(|v| v.to_str().ok()),
        Some("content-type,x-requested-with")
    );
}
