use axum::{extract::State, http::StatusCode, Json};
use infra::StoreError;

use super::Created;
use crate::error::{AppError, FieldError};
use crate::extract::JsonBody;
use crate::inputs::NewsletterInput;
use crate::state::AppState;

/// POST /api/newsletter
pub async fn subscribe(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewsletterInput>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let subscription = state
        .store
        .create_subscription(input.validate()?)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate(_) => AppError::validation(
                "Invalid email address",
                vec![FieldError::new("email", "Email is already subscribed")],
            ),
            other => other.into(),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(Created { message: "Successfully subscribed to newsletter", id: subscription.id }),
    ))
}
