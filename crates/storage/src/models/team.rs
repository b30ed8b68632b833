use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub short_name: String,
    pub sport_id: i64,
    pub logo_url: Option<String>,
    pub city: String,
    pub slug: String,
}
