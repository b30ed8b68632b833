use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: i64,
    pub name: String,
    pub sport_id: i64,
    pub slug: String,
    /// Whether the tournament belongs to the current season
    pub is_active: bool,
    pub description: String,
}
