use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::article::ArticleSummary;
use crate::models::{Athlete, Match, MatchStatus, Team};

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamDetailResponse {
    pub team: Team,
    pub sport_name: String,
    pub roster: Vec<Athlete>,
    pub matches: Vec<TeamMatchEntry>,
    pub news: Vec<ArticleSummary>,
}

/// One of the team's matches, seen from the team's side
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamMatchEntry {
    pub match_id: i64,
    pub date_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub tournament_name: String,
    pub is_home: bool,
    pub opponent_id: i64,
    pub opponent_name: String,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub combined_score: i32,
    pub is_upcoming: bool,
}

#[derive(Debug)]
pub struct TeamMatchRow {
    pub game: Match,
    pub tournament_name: String,
    pub home_team_name: String,
    pub away_team_name: String,
}

impl TeamMatchRow {
    pub fn into_entry(self, team_id: i64, now: DateTime<Utc>) -> TeamMatchEntry {
        let is_home = self.game.home_team_id == team_id;
        let opponent_name = if is_home {
            self.away_team_name
        } else {
            self.home_team_name
        };

        TeamMatchEntry {
            match_id: self.game.match_id,
            date_time: self.game.date_time,
            status: self.game.status,
            tournament_name: self.tournament_name,
            is_home,
            opponent_id: self.game.opponent_of(team_id),
            opponent_name,
            score_home: self.game.score_home,
            score_away: self.game.score_away,
            combined_score: self.game.combined_score(),
            is_upcoming: self.game.is_upcoming(now),
        }
    }
}
