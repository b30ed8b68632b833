use sqlx::PgPool;

use crate::dto::catalog::CreateTournamentRequest;
use crate::error::{Result, StorageError};
use crate::models::Tournament;

pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateTournamentRequest) -> Result<Tournament> {
        let tournament = sqlx::query_as!(
            Tournament,
            r#"
            INSERT INTO tournaments (name, sport_id, slug, is_active, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING tournament_id, name, sport_id, slug, is_active, description
            "#,
            req.name,
            req.sport_id,
            req.slug,
            req.is_active,
            req.description
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Slug already exists"))?;

        Ok(tournament)
    }
}
