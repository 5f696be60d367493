use sqlx::Result as SqlxResult;

use crate::db::Db;
use crate::models::{NewSubscription, NewsletterRow};

#[derive(Clone)]
pub struct NewsletterRepo {
    pool: Db,
}

impl NewsletterRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    /// Fails with a unique violation when the email is already subscribed.
    pub async fn create(&self, data: NewSubscription) -> SqlxResult<NewsletterRow> {
        sqlx::query_as::<_, NewsletterRow>(
            r#"
            INSERT INTO newsletters (email, is_active)
            VALUES ($1, TRUE)
            RETURNING id, email, is_active, created_at
            "#,
        )
        .bind(data.email)
        .fetch_one(&self.pool)
        .await
    }
}
