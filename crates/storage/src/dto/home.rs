use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::article::ArticleSummary;
use crate::models::MatchStatus;

/// A match with the display names of everything it references
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchSummary {
    pub match_id: i64,
    pub date_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub tournament_name: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub broadcast_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    /// Matches that have not started yet, soonest first, canceled ones left out
    pub upcoming_matches: Vec<MatchSummary>,
    /// Sum of home scores over every match in the store
    pub total_home_goals: i64,
    pub latest_news: Vec<ArticleSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamCity {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub statuses: Vec<MatchStatus>,
    pub teams: Vec<TeamCity>,
}
