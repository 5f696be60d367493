mod common;

use axum::{body::Body, http::Request};
use common::*;

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = setup_test_app();

    let (status, _) = app.get("/api/highlights").await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/newsletter")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\": "))
        .unwrap();
    let (status, body) = app.send_request(request).await;

    assert_eq!(status, 400);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn test_seeded_store_serves_catalogue() {
    let app = setup_test_app();
    infra::seed::seed(app.state.store.as_ref()).await.unwrap();

    let (_, tournaments) = app.get("/api/tournaments").await;
    assert_eq!(tournaments.as_array().unwrap().len(), 4);
    assert_eq!(tournaments[0]["name"], "Weekly Clash #12");
    assert_eq!(tournaments[0]["status"], "live");

    let (_, posts) = app.get("/api/blog/posts").await;
    assert_eq!(posts.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_user_service_shares_the_app_store() {
    let app = setup_test_app();

    let user = app
        .state
        .user_service()
        .create_user("tournament_admin", "firestorm24")
        .await
        .unwrap();

    let stored = app.state.store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(stored.username, "tournament_admin");
    assert_ne!(stored.password_hash, "firestorm24");
    assert!(app
        .state
        .user_service()
        .verify_credentials("tournament_admin", "firestorm24")
        .await
        .unwrap()
        .is_some());
}
