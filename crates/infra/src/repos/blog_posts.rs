use sqlx::Result as SqlxResult;
use uuid::Uuid;

use crate::db::Db;
use crate::models::{BlogPostRow, NewBlogPost};

#[derive(Clone)]
pub struct BlogPostRepo {
    pool: Db,
}

impl BlogPostRepo {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: NewBlogPost) -> SqlxResult<BlogPostRow> {
        sqlx::query_as::<_, BlogPostRow>(
            r#"
            INSERT INTO blog_posts (title, content, excerpt, category, author, image_url, views, read_time,
                                    created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), COALESCE($9, NOW()))
            RETURNING id, title, content, excerpt, category, author, image_url, views, read_time,
                      created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.excerpt)
        .bind(data.category)
        .bind(data.author)
        .bind(data.image_url)
        .bind(data.views)
        .bind(data.read_time)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn get(&self, id: Uuid) -> SqlxResult<Option<BlogPostRow>> {
        sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, excerpt, category, author, image_url, views, read_time,
                   created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list(&self) -> SqlxResult<Vec<BlogPostRow>> {
        sqlx::query_as::<_, BlogPostRow>(
            r#"
            SELECT id, title, content, excerpt, category, author, image_url, views, read_time,
                   created_at, updated_at
            FROM blog_posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// In-place increment; returns false when the post does not exist.
    pub async fn increment_views(&self, id: Uuid) -> SqlxResult<bool> {
        let result = sqlx::query("UPDATE blog_posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
