use sqlx::Result as SqlxResult;
use uuid::Uuid;

use crate::db::Db;
use crate::models::{NewRegistration, RegistrationRow, TournamentStatus};

/// Result of trying to claim a seat inside the registration transaction.
#[derive(Debug)]
pub enum CommitOutcome {
    Committed(RegistrationRow),
    TournamentMissing,
    Closed,
    Full,
}

#[derive(Clone)]
pub struct RegistrationRepo {
    pool: Db,
}

impl RegistrationRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Inserts the registration and bumps `current_players` in one transaction.
    ///
    /// The tournament row is locked with `FOR UPDATE`, so concurrent commits
    /// against the same tournament are serialized and the capacity check
    /// cannot be raced.
    pub async fn commit(&self, data: NewRegistration) -> SqlxResult<CommitOutcome> {
        let mut tx = self.pool.begin().await?;

        let seat: Option<(i32, i32, String)> = sqlx::query_as(
            r#"
            SELECT current_players, max_players, status
            FROM tournaments
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(data.tournament_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((current_players, max_players, status)) = seat else {
            return Ok(CommitOutcome::TournamentMissing);
        };

        let open = status
            .parse::<TournamentStatus>()
            .map(|s| s.accepts_registrations())
            .unwrap_or(false);
        if !open {
            return Ok(CommitOutcome::Closed);
        }
        if current_players >= max_players {
            return Ok(CommitOutcome::Full);
        }

        let row = sqlx::query_as::<_, RegistrationRow>(
            r#"
            INSERT INTO registrations (tournament_id, player_name, email, age, free_fire_id, has_parental_consent)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, tournament_id, player_name, email, age, free_fire_id, has_parental_consent, created_at
            "#,
        )
        .bind(data.tournament_id)
        .bind(data.player_name)
        .bind(data.email)
        .bind(data.age)
        .bind(data.free_fire_id)
        .bind(data.has_parental_consent)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE tournaments SET current_players = current_players + 1 WHERE id = $1")
            .bind(data.tournament_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CommitOutcome::Committed(row))
    }

    pub async fn list(&self, tournament_id: Option<Uuid>) -> SqlxResult<Vec<RegistrationRow>> {
        sqlx::query_as::<_, RegistrationRow>(
            r#"
            SELECT id, tournament_id, player_name, email, age, free_fire_id, has_parental_consent, created_at
            FROM registrations
            WHERE ($1::uuid IS NULL OR tournament_id = $1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }
}
