use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchParticipation {
    pub participation_id: i64,
    pub match_id: i64,
    pub athlete_id: i64,
    pub goals_scored: i32,
    pub minutes_played: i32,
    pub yellow_card: bool,
}
