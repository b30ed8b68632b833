use sqlx::PgPool;

use crate::dto::article::TeamRef;
use crate::dto::catalog::CreateTeamRequest;
use crate::dto::home::TeamCity;
use crate::error::{Result, StorageError};
use crate::models::Team;

pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Team> {
        sqlx::query_as!(
            Team,
            r#"
            SELECT team_id, name, short_name, sport_id, logo_url, city, slug
            FROM teams
            WHERE team_id = $1
            "#,
            id
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Flat (name, city) projection of every team
    pub async fn name_city_pairs(&self) -> Result<Vec<TeamCity>> {
        let rows = sqlx::query_as!(
            TeamCity,
            r#"
            SELECT name, city
            FROM teams
            ORDER BY team_id
            "#
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Teams an article is about
    pub async fn for_article(&self, article_id: i64) -> Result<Vec<TeamRef>> {
        let teams = sqlx::query_as!(
            TeamRef,
            r#"
            SELECT t.team_id, t.name, t.slug
            FROM article_teams link
            JOIN teams t ON t.team_id = link.team_id
            WHERE link.article_id = $1
            ORDER BY t.name
            "#,
            article_id
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as!(
            Team,
            r#"
            INSERT INTO teams (name, short_name, sport_id, logo_url, city, slug)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING team_id, name, short_name, sport_id, logo_url, city, slug
            "#,
            req.name,
            req.short_name,
            req.sport_id,
            req.logo_url,
            req.city,
            req.slug
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Slug already exists"))?;

        Ok(team)
    }
}
