//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::LinkRepository;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uniqueness of `short_code` is enforced by the `links_short_code_key`
/// constraint, so a single `INSERT` either claims a code or is rejected.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    short_code: String,
    long_url: String,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.short_code, row.long_url, row.expires_at, row.created_at)
    }
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, long_url, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING short_code, long_url, expires_at, created_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.long_url)
        .bind(new_link.expires_at)
        .bind(new_link.created_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                RepositoryError::UniqueViolation(new_link.short_code.clone())
            } else {
                storage_error(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT short_code, long_url, expires_at, created_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(storage_error)?;

        Ok(row.map(Link::from))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
