use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `None` for free agents
    pub current_team_id: Option<i64>,
    pub sport_id: i64,
    pub birth_date: Option<NaiveDate>,
    pub photo_url: Option<String>,
    pub position: String,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
