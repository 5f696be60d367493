mod common;

use common::*;
use infra::models::NewSubscription;
use serde_json::json;

#[tokio::test]
async fn test_contact_message_created() {
    let app = setup_test_app();

    let (status, body) = app
        .post(
            "/api/contact",
            json!({
                "name": "Sam Parent",
                "email": "sam@example.com",
                "subject": "Age rules",
                "message": "Can a 12 year old join the Rookie Championship?"
            }),
        )
        .await;

    assert_eq!(status, 201);
    assert_eq!(body["message"], "Message sent successfully");
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_contact_requires_fields() {
    let app = setup_test_app();

    let (status, body) = app
        .post(
            "/api/contact",
            json!({ "name": "", "email": "sam@example.com", "subject": "Hi", "message": "" }),
        )
        .await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid contact data");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let app = setup_test_app();

    let (status, body) = app.post("/api/newsletter", json!({ "email": "fan@example.com" })).await;

    assert_eq!(status, 201);
    assert_eq!(body["message"], "Successfully subscribed to newsletter");
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_newsletter_rejects_invalid_email() {
    let app = setup_test_app();

    let (status, body) = app.post("/api/newsletter", json!({ "email": "not-an-email" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid email address");
    assert_eq!(body["errors"][0]["field"], "email");

    // Nothing was stored: the same address is still free at the store level.
    let stored = app
        .state
        .store
        .create_subscription(NewSubscription { email: "not-an-email".into() })
        .await;
    assert!(stored.is_ok());
}

#[tokio::test]
async fn test_newsletter_rejects_duplicate() {
    let app = setup_test_app();

    let (first, _) = app.post("/api/newsletter", json!({ "email": "fan@example.com" })).await;
    assert_eq!(first, 201);

    let (status, body) = app.post("/api/newsletter", json!({ "email": "fan@example.com" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["errors"][0]["message"], "Email is already subscribed");
}
