use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sport {
    pub sport_id: i64,
    pub name: String,
    pub slug: String,
    pub icon_url: Option<String>,
}
