use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::home::{HomeResponse, StatsResponse},
    error::Result,
    repository::{article::ArticleRepository, game::MatchRepository, team::TeamRepository},
};

/// Size of the "latest news" block on the home page
const LATEST_NEWS_COUNT: i64 = 3;

/// Upcoming matches, the all-time home score total and the latest news
pub async fn home(pool: &PgPool) -> Result<HomeResponse> {
    let matches = MatchRepository::new(pool);

    let upcoming_matches = matches.upcoming(Utc::now()).await?;
    let total_home_goals = matches.total_home_score().await?;
    let latest_news = ArticleRepository::new(pool)
        .published()
        .latest(LATEST_NEWS_COUNT)
        .await?;

    Ok(HomeResponse {
        upcoming_matches,
        total_home_goals,
        latest_news,
    })
}

/// Distinct match statuses and (team, city) pairs
pub async fn stats(pool: &PgPool) -> Result<StatsResponse> {
    let statuses = MatchRepository::new(pool).distinct_statuses().await?;
    let teams = TeamRepository::new(pool).name_city_pairs().await?;

    Ok(StatsResponse { statuses, teams })
}
