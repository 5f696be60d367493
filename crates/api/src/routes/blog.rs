use axum::{
    extract::{Path, State},
    Json,
};
use infra::models::BlogPostRow;

use super::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/blog/posts, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BlogPostRow>>, AppError> {
    Ok(Json(state.store.list_blog_posts().await?))
}

/// GET /api/blog/posts/:id
///
/// Every successful read counts as one view; the returned post already
/// includes it.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPostRow>, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Post"))?;

    if !state.store.increment_post_views(id).await? {
        return Err(AppError::not_found("Post"));
    }

    state
        .store
        .get_blog_post(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Post"))
}
