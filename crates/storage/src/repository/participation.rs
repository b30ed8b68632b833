use sqlx::PgPool;

use crate::dto::catalog::CreateParticipationRequest;
use crate::error::{Result, StorageError};
use crate::models::MatchParticipation;

pub struct ParticipationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateParticipationRequest) -> Result<MatchParticipation> {
        let participation = sqlx::query_as!(
            MatchParticipation,
            r#"
            INSERT INTO match_participations (match_id, athlete_id, goals_scored,
                                              minutes_played, yellow_card)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING participation_id, match_id, athlete_id, goals_scored,
                      minutes_played, yellow_card
            "#,
            req.match_id,
            req.athlete_id,
            req.goals_scored,
            req.minutes_played,
            req.yellow_card
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_conflict("Athlete already has statistics for this match")
        })?;

        Ok(participation)
    }
}
