use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use super::Created;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::inputs::ContactInput;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContactInput>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let contact = state.store.create_contact(input.validate()?).await?;
    info!(contact_id = %contact.id, "support message received");

    Ok((
        StatusCode::CREATED,
        Json(Created { message: "Message sent successfully", id: contact.id }),
    ))
}
