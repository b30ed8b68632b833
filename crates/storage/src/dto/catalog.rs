use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::article::validate_slug;
use crate::models::MatchStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSportRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[validate(url)]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub sport_id: i64,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub short_name: String,

    pub sport_id: i64,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub city: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "First name must be between 1 and 200 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Last name must be between 1 and 200 characters"
    ))]
    pub last_name: String,

    /// Omit for a free agent
    pub current_team_id: Option<i64>,

    pub sport_id: i64,

    pub birth_date: Option<NaiveDate>,

    #[validate(url)]
    pub photo_url: Option<String>,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_match"))]
pub struct CreateMatchRequest {
    pub tournament_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub date_time: DateTime<Utc>,

    #[serde(default)]
    pub status: MatchStatus,

    #[validate(range(min = 0))]
    pub score_home: Option<i32>,

    #[validate(range(min = 0))]
    pub score_away: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub broadcast_url: String,
}

/// Result entry for a match: status plus the final or running score
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchResultRequest {
    pub status: MatchStatus,

    #[validate(range(min = 0))]
    pub score_home: Option<i32>,

    #[validate(range(min = 0))]
    pub score_away: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateParticipationRequest {
    pub match_id: i64,
    pub athlete_id: i64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub goals_scored: i32,

    #[serde(default)]
    #[validate(range(min = 0, max = 300))]
    pub minutes_played: i32,

    #[serde(default)]
    pub yellow_card: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
}

fn default_true() -> bool {
    true
}

fn validate_create_match(req: &CreateMatchRequest) -> Result<(), ValidationError> {
    if req.home_team_id == req.away_team_id {
        let mut error = ValidationError::new("same_team");
        error.message = Some("A team cannot play against itself".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_defaults_to_scheduled_without_scores() {
        let req: CreateMatchRequest = serde_json::from_str(
            r#"{"tournament_id": 1, "home_team_id": 1, "away_team_id": 2,
                "date_time": "2026-05-01T18:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.status, MatchStatus::Scheduled);
        assert!(req.score_home.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn team_cannot_play_itself() {
        let req: CreateMatchRequest = serde_json::from_str(
            r#"{"tournament_id": 1, "home_team_id": 4, "away_team_id": 4,
                "date_time": "2026-05-01T18:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_scores_are_rejected() {
        let req = UpdateMatchResultRequest {
            status: MatchStatus::Finished,
            score_home: Some(-1),
            score_away: Some(0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn athlete_without_team_is_a_free_agent() {
        let req: CreateAthleteRequest = serde_json::from_str(
            r#"{"first_name": "Ivan", "last_name": "Petrov", "sport_id": 1}"#,
        )
        .unwrap();
        assert!(req.current_team_id.is_none());
        assert!(req.validate().is_ok());
    }
}
