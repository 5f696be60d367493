use sqlx::Result as SqlxResult;

use crate::db::Db;
use crate::models::{ContactRow, NewContact, CONTACT_PENDING};

#[derive(Clone)]
pub struct ContactRepo {
    pool: Db,
}

impl ContactRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewContact) -> SqlxResult<ContactRow> {
        sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (name, email, subject, message, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, subject, message, status, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.email)
        .bind(data.subject)
        .bind(data.message)
        .bind(CONTACT_PENDING)
        .fetch_one(&self.pool)
        .await
    }
}
