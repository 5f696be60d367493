use std::sync::Arc;
use std::time::Duration;

use api::{app::build_router, AppState};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use infra::models::{NewBlogPost, NewTournament, TournamentStatus, DEFAULT_MIN_LEVEL};
use infra::{MemStore, Store};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

/// Router over a fresh, empty in-memory store.
pub fn setup_test_app() -> TestApp {
    let store: Arc<dyn Store> = Arc::new(MemStore::new());
    let state = AppState::new(store);
    let router = build_router(state.clone(), Duration::from_secs(5));
    TestApp { state, router }
}

#[allow(dead_code)]
impl TestApp {
    /// Sends one request and returns the status plus the decoded body
    /// (a JSON string for non-JSON bodies).
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }
}

/// Create test tournament and return its ID
#[allow(dead_code)]
pub async fn create_test_tournament(
    app: &TestApp,
    name: &str,
    max_players: i32,
    current_players: i32,
    status: TournamentStatus,
) -> Uuid {
    app.state
        .store
        .create_tournament(NewTournament {
            name: name.to_string(),
            description: "Test tournament description".to_string(),
            prize_pool: 2500,
            max_players,
            current_players,
            format: "Battle Royale".to_string(),
            status,
            start_date: Utc.with_ymd_and_hms(2024, 12, 1, 18, 0, 0).unwrap(),
            end_date: None,
            eligibility_min_level: DEFAULT_MIN_LEVEL,
            eligibility_max_level: None,
        })
        .await
        .expect("Failed to create test tournament")
        .id
}

/// Create test blog post and return its ID
#[allow(dead_code)]
pub async fn create_test_post(app: &TestApp, title: &str, views: i32) -> Uuid {
    app.state
        .store
        .create_blog_post(NewBlogPost {
            title: title.to_string(),
            content: "Full article".to_string(),
            excerpt: "Short excerpt".to_string(),
            category: "TIPS".to_string(),
            author: "Squad_Master".to_string(),
            image_url: None,
            read_time: "5 min read".to_string(),
            views,
            created_at: None,
        })
        .await
        .expect("Failed to create test post")
        .id
}

/// A registration body that passes shape validation.
#[allow(dead_code)]
pub fn registration_body(tournament_id: &str) -> Value {
    serde_json::json!({
        "tournamentId": tournament_id,
        "playerName": "Nova",
        "email": "nova@example.com",
        "age": 15,
        "freeFireId": "123456789",
        "hasParentalConsent": true
    })
}
