use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::team::TeamDetailResponse,
    error::Result,
    repository::{
        article::ArticleRepository, athlete::AthleteRepository, game::MatchRepository,
        sport::SportRepository, team::TeamRepository,
    },
};

/// Team page: roster, matches seen from the team's side and published news
pub async fn get_team_detailed(pool: &PgPool, team_id: i64) -> Result<TeamDetailResponse> {
    let team = TeamRepository::new(pool).find_by_id(team_id).await?;
    let sport = SportRepository::new(pool).find_by_id(team.sport_id).await?;
    let roster = AthleteRepository::new(pool).roster(team_id).await?;

    let now = Utc::now();
    let matches = MatchRepository::new(pool)
        .for_team(team_id)
        .await?
        .into_iter()
        .map(|row| row.into_entry(team_id, now))
        .collect();

    let news = ArticleRepository::new(pool)
        .published()
        .for_team(team_id)
        .await?;

    Ok(TeamDetailResponse {
        team,
        sport_name: sport.name,
        roster,
        matches,
        news,
    })
}
