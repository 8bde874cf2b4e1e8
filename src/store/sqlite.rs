use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::PostStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Post, PostData};

const POST_COLUMNS: &str = "slug, title, markdown, created_at, updated_at";

#[derive(Clone)]
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error, slug: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.message().starts_with("UNIQUE constraint failed") =>
        {
            StoreError::SlugTaken(slug.to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn find_many(&self) -> StoreResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts"))
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn find_unique(&self, slug: &str) -> StoreResult<Option<Post>> {
        let post =
            sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = ?"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;
        Ok(post)
    }

    async fn create(&self, data: PostData) -> StoreResult<Post> {
        let now = Utc::now();
        sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts (slug, title, markdown, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.markdown)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_write_error(err, &data.slug))
    }

    async fn update(&self, slug: &str, data: PostData) -> StoreResult<Post> {
        sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts
            SET slug = ?, title = ?, markdown = ?, updated_at = ?
            WHERE slug = ?
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.markdown)
        .bind(Utc::now())
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_write_error(err, &data.slug))?
        .ok_or_else(|| StoreError::NotFound(slug.to_string()))
    }
}
