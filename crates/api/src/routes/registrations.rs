use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use infra::models::RegistrationRow;
use serde::Deserialize;

use super::parse_id;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::inputs::RegistrationInput;
use crate::state::AppState;

/// POST /api/registrations
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegistrationInput>,
) -> Result<(StatusCode, Json<RegistrationRow>), AppError> {
    let registration = state.registration_service().submit(input).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationQuery {
    pub tournament_id: Option<String>,
}

/// GET /api/registrations?tournamentId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RegistrationQuery>,
) -> Result<Json<Vec<RegistrationRow>>, AppError> {
    let filter = match query.tournament_id.as_deref() {
        None => None,
        Some(raw) => match parse_id(raw) {
            Some(id) => Some(id),
            // Nothing can reference an id the store never issued.
            None => return Ok(Json(Vec::new())),
        },
    };
    Ok(Json(state.store.list_registrations(filter).await?))
}
