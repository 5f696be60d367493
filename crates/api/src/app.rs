use std::time::Duration;

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::error::AppError;
use crate::routes::{blog, contact, newsletter, registrations, tournaments};
use crate::state::AppState;

/// Build the Axum router with the health endpoint and the `/api` routes.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let api = Router::new()
        .route("/tournaments", get(tournaments::list))
        .route("/tournaments/:id", get(tournaments::get))
        .route("/registrations", post(registrations::create).get(registrations::list))
        .route("/blog/posts", get(blog::list))
        .route("/blog/posts/:id", get(blog::get))
        .route("/contact", post(contact::create))
        .route("/newsletter", post(newsletter::subscribe));

    Router::new()
        // Liveness check; also proves the store answers.
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
}

async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
