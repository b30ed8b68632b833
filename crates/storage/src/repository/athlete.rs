use sqlx::PgPool;

use crate::dto::article::AthleteRef;
use crate::dto::catalog::CreateAthleteRequest;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Current roster of a team
    pub async fn roster(&self, team_id: i64) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as!(
            Athlete,
            r#"
            SELECT athlete_id, first_name, last_name, current_team_id, sport_id,
                   birth_date, photo_url, position
            FROM athletes
            WHERE current_team_id = $1
            ORDER BY last_name, first_name
            "#,
            team_id
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Athletes an article is about
    pub async fn for_article(&self, article_id: i64) -> Result<Vec<AthleteRef>> {
        let athletes = sqlx::query_as!(
            AthleteRef,
            r#"
            SELECT a.athlete_id, a.first_name, a.last_name
            FROM article_athletes aa
            JOIN athletes a ON a.athlete_id = aa.athlete_id
            WHERE aa.article_id = $1
            ORDER BY a.last_name, a.first_name
            "#,
            article_id
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as!(
            Athlete,
            r#"
            INSERT INTO athletes (first_name, last_name, current_team_id, sport_id,
                                  birth_date, photo_url, position)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING athlete_id, first_name, last_name, current_team_id, sport_id,
                      birth_date, photo_url, position
            "#,
            req.first_name,
            req.last_name,
            req.current_team_id,
            req.sport_id,
            req.birth_date,
            req.photo_url,
            req.position
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Athlete already exists"))?;

        tracing::debug!(athlete = %athlete.full_name(), "Athlete created");

        Ok(athlete)
    }
}
