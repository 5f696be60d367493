use std::sync::Arc;

use infra::models::RegistrationRow;
use infra::Store;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::inputs::RegistrationInput;

/// Gates new registrations on the state of the referenced tournament.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn Store>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validates the submission, checks that the tournament exists, is open
    /// and has a free seat, then commits the registration together with the
    /// player-count increment.
    ///
    /// The store repeats the status and capacity checks inside its own
    /// critical section, so two submissions racing for the last seat cannot
    /// both be accepted.
    pub async fn submit(&self, input: RegistrationInput) -> Result<RegistrationRow, AppError> {
        input.validate()?;

        // An id that is not a UUID can never have been issued by the store.
        let Ok(tournament_id) = Uuid::parse_str(input.tournament_id.trim()) else {
            return Err(AppError::not_found("Tournament"));
        };

        let tournament = self
            .store
            .get_tournament(tournament_id)
            .await?
            .ok_or_else(|| AppError::not_found("Tournament"))?;

        if !tournament.status.accepts_registrations() {
            return Err(AppError::Conflict("Registration is closed for this tournament".into()));
        }
        if tournament.is_full() {
            return Err(AppError::Conflict("Tournament is full".into()));
        }

        if input.age < 16 && !input.has_parental_consent {
            // Consent is a front-end form rule; recorded as submitted.
            warn!(%tournament_id, age = input.age, "registration under 16 without parental consent");
        }

        let registration = self
            .store
            .commit_registration(input.into_new(tournament_id))
            .await?;

        info!(
            %tournament_id,
            registration_id = %registration.id,
            max_players = tournament.max_players,
            "registration accepted"
        );

        Ok(registration)
    }
}
