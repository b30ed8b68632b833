use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
    Canceled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Finished => "finished",
            Self::Canceled => "canceled",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single game between two teams within a tournament.
///
/// Scores stay `None` until the game has been played, so a scheduled match
/// without scores is a normal state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: i64,
    pub tournament_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub date_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub broadcast_url: String,
}

impl Match {
    /// Sum of both scores, or 0 while either side has no score yet.
    pub fn combined_score(&self) -> i32 {
        combined_score(self.score_home, self.score_away)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date_time >= now && self.status != MatchStatus::Canceled
    }

    /// The opposing team id from the point of view of `team_id`.
    pub fn opponent_of(&self, team_id: i64) -> i64 {
        if self.home_team_id == team_id {
            self.away_team_id
        } else {
            self.home_team_id
        }
    }
}

pub(crate) fn combined_score(home: Option<i32>, away: Option<i32>) -> i32 {
    match (home, away) {
        (Some(home), Some(away)) => home + away,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn game(offset: Duration, status: MatchStatus) -> Match {
        Match {
            match_id: 1,
            tournament_id: 1,
            home_team_id: 10,
            away_team_id: 20,
            date_time: Utc::now() + offset,
            status,
            score_home: None,
            score_away: None,
            broadcast_url: String::new(),
        }
    }

    #[test]
    fn combined_score_requires_both_sides() {
        assert_eq!(combined_score(Some(3), Some(1)), 4);
        assert_eq!(combined_score(Some(3), None), 0);
        assert_eq!(combined_score(None, None), 0);
    }

    #[test]
    fn past_and_canceled_matches_are_not_upcoming() {
        let now = Utc::now();
        assert!(game(Duration::hours(2), MatchStatus::Scheduled).is_upcoming(now));
        assert!(!game(Duration::hours(-2), MatchStatus::Scheduled).is_upcoming(now));
        assert!(!game(Duration::hours(2), MatchStatus::Canceled).is_upcoming(now));
    }

    #[test]
    fn opponent_is_the_other_side() {
        let m = game(Duration::zero(), MatchStatus::Live);
        assert_eq!(m.opponent_of(10), 20);
        assert_eq!(m.opponent_of(20), 10);
    }

    #[test]
    fn status_serializes_as_its_database_label() {
        for status in [
            MatchStatus::Scheduled,
            MatchStatus::Live,
            MatchStatus::Finished,
            MatchStatus::Canceled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert!(serde_json::from_str::<MatchStatus>("\"postponed\"").is_err());
    }
}
