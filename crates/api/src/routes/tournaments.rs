use axum::{
    extract::{Path, State},
    Json,
};
use infra::models::TournamentRow;

use super::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/tournaments, soonest start first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TournamentRow>>, AppError> {
    Ok(Json(state.store.list_tournaments().await?))
}

/// GET /api/tournaments/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TournamentRow>, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::not_found("Tournament"))?;
    state
        .store
        .get_tournament(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Tournament"))
}
