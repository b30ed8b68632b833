use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::dto::catalog::{CreateMatchRequest, UpdateMatchResultRequest};
use crate::dto::home::MatchSummary;
use crate::dto::team::TeamMatchRow;
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchStatus};

/// Repository for Match database operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_summary(&self, id: i64) -> Result<MatchSummary> {
        sqlx::query_as!(
            MatchSummary,
            r#"
            SELECT m.match_id, m.date_time, m.status as "status: MatchStatus",
                   tr.name AS tournament_name,
                   home.name AS home_team_name,
                   away.name AS away_team_name,
                   m.score_home, m.score_away, m.broadcast_url
            FROM matches m
            JOIN tournaments tr ON tr.tournament_id = m.tournament_id
            JOIN teams home ON home.team_id = m.home_team_id
            JOIN teams away ON away.team_id = m.away_team_id
            WHERE m.match_id = $1
            "#,
            id
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Matches starting at or after `now` that are not canceled, soonest first
    pub async fn upcoming(&self, now: DateTime<Utc>) -> Result<Vec<MatchSummary>> {
        let matches = sqlx::query_as!(
            MatchSummary,
            r#"
            SELECT m.match_id, m.date_time, m.status as "status: MatchStatus",
                   tr.name AS tournament_name,
                   home.name AS home_team_name,
                   away.name AS away_team_name,
                   m.score_home, m.score_away, m.broadcast_url
            FROM matches m
            JOIN tournaments tr ON tr.tournament_id = m.tournament_id
            JOIN teams home ON home.team_id = m.home_team_id
            JOIN teams away ON away.team_id = m.away_team_id
            WHERE m.date_time >= $1
              AND m.status <> 'canceled'
            ORDER BY m.date_time ASC, m.match_id ASC
            "#,
            now
        )
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Sum of home scores across every match, whatever its date or status.
    /// Unplayed matches contribute nothing.
    pub async fn total_home_score(&self) -> Result<i64> {
        let total = sqlx::query_scalar!(
            r#"SELECT COALESCE(SUM(score_home), 0)::BIGINT as "total!" FROM matches"#
        )
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    /// Every status value that currently appears on at least one match
    pub async fn distinct_statuses(&self) -> Result<Vec<MatchStatus>> {
        let statuses = sqlx::query_scalar!(
            r#"SELECT DISTINCT status as "status!: MatchStatus" FROM matches ORDER BY status"#
        )
        .fetch_all(self.pool)
        .await?;

        Ok(statuses)
    }

    /// Home and away matches of a team, newest first
    pub async fn for_team(&self, team_id: i64) -> Result<Vec<TeamMatchRow>> {
        let rows = sqlx::query!(
            r#"
            SELECT m.match_id, m.tournament_id, m.home_team_id, m.away_team_id,
                   m.date_time, m.status as "status: MatchStatus",
                   m.score_home, m.score_away, m.broadcast_url,
                   tr.name AS tournament_name,
                   home.name AS home_team_name,
                   away.name AS away_team_name
            FROM matches m
            JOIN tournaments tr ON tr.tournament_id = m.tournament_id
            JOIN teams home ON home.team_id = m.home_team_id
            JOIN teams away ON away.team_id = m.away_team_id
            WHERE m.home_team_id = $1 OR m.away_team_id = $1
            ORDER BY m.date_time DESC
            "#,
            team_id
        )
        .fetch_all(self.pool)
        .await?;

        let rows = rows
            .into_iter()
            .map(|row| TeamMatchRow {
                game: Match {
                    match_id: row.match_id,
                    tournament_id: row.tournament_id,
                    home_team_id: row.home_team_id,
                    away_team_id: row.away_team_id,
                    date_time: row.date_time,
                    status: row.status,
                    score_home: row.score_home,
                    score_away: row.score_away,
                    broadcast_url: row.broadcast_url,
                },
                tournament_name: row.tournament_name,
                home_team_name: row.home_team_name,
                away_team_name: row.away_team_name,
            })
            .collect();

        Ok(rows)
    }

    pub async fn create(&self, req: &CreateMatchRequest) -> Result<Match> {
        let game = sqlx::query_as!(
            Match,
            r#"
            INSERT INTO matches (tournament_id, home_team_id, away_team_id, date_time,
                                 status, score_home, score_away, broadcast_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING match_id, tournament_id, home_team_id, away_team_id, date_time,
                      status as "status: MatchStatus", score_home, score_away, broadcast_url
            "#,
            req.tournament_id,
            req.home_team_id,
            req.away_team_id,
            req.date_time,
            req.status as MatchStatus,
            req.score_home,
            req.score_away,
            req.broadcast_url
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Match already exists"))?;

        Ok(game)
    }

    /// Record the status and score of a match
    pub async fn update_result(&self, id: i64, req: &UpdateMatchResultRequest) -> Result<Match> {
        let game = sqlx::query_as!(
            Match,
            r#"
            UPDATE matches
            SET status = $2,
                score_home = $3,
                score_away = $4
            WHERE match_id = $1
            RETURNING match_id, tournament_id, home_team_id, away_team_id, date_time,
                      status as "status: MatchStatus", score_home, score_away, broadcast_url
            "#,
            id,
            req.status as MatchStatus,
            req.score_home,
            req.score_away
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        tracing::info!(match_id = id, status = %game.status, "Match result updated");

        Ok(game)
    }
}
