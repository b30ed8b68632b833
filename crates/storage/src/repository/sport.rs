use sqlx::PgPool;

use crate::dto::catalog::CreateSportRequest;
use crate::error::{Result, StorageError};
use crate::models::Sport;

pub struct SportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Sport> {
        sqlx::query_as!(
            Sport,
            r#"
            SELECT sport_id, name, slug, icon_url
            FROM sports
            WHERE sport_id = $1
            "#,
            id
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, req: &CreateSportRequest) -> Result<Sport> {
        let sport = sqlx::query_as!(
            Sport,
            r#"
            INSERT INTO sports (name, slug, icon_url)
            VALUES ($1, $2, $3)
            RETURNING sport_id, name, slug, icon_url
            "#,
            req.name,
            req.slug,
            req.icon_url
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Slug already exists"))?;

        Ok(sport)
    }
}
