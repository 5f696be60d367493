use crate::{db::Db, models::{NewTournament, TournamentRow}};
use sqlx::Result as SqlxResult;
use uuid::Uuid;

const TOURNAMENT_COLUMNS: &str = "id, name, description, prize_pool, max_players, current_players, \
     format, status, start_date, end_date, eligibility_min_level, eligibility_max_level, created_at";

#[derive(Clone)]
pub struct TournamentRepo {
    pool: Db,
}

impl TournamentRepo {
    pub fn new(pool: Db) -> Self { Self { pool } }

    pub async fn create(&self, data: NewTournament) -> SqlxResult<TournamentRow> {
        sqlx::query_as::<_, TournamentRow>(&format!(
            r#"
            INSERT INTO tournaments (name, description, prize_pool, max_players, current_players,
                                     format, status, start_date, end_date,
                                     eligibility_min_level, eligibility_max_level)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
            .bind(data.name)
            .bind(data.description)
            .bind(data.prize_pool)
            .bind(data.max_players)
            .bind(data.current_players)
            .bind(data.format)
            .bind(data.status.as_str())
            .bind(data.start_date)
            .bind(data.end_date)
            .bind(data.eligibility_min_level)
            .bind(data.eligibility_max_level)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn get(&self, id: Uuid) -> SqlxResult<Option<TournamentRow>> {
        sqlx::query_as::<_, TournamentRow>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = $1"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> SqlxResult<Vec<TournamentRow>> {
        sqlx::query_as::<_, TournamentRow>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments ORDER BY start_date ASC"
        ))
            .fetch_all(&self.pool)
            .await
    }
}
