use serde_json::Value;
use sqlx::PgPool;
use storage::{
    dto::catalog::{
        CreateAthleteRequest, CreateMatchRequest, CreateParticipationRequest,
        CreateSportRequest, CreateTagRequest, CreateTeamRequest, CreateTournamentRequest,
        UpdateMatchResultRequest,
    },
    error::Result,
    models::{Athlete, Match, MatchParticipation, Sport, Tag, Team, Tournament},
    repository::{
        admin::AdminRepository, athlete::AthleteRepository, game::MatchRepository,
        participation::ParticipationRepository, sport::SportRepository, tag::TagRepository,
        team::TeamRepository, tournament::TournamentRepository,
    },
    services::{
        admin_site::EntityAdmin,
        pagination::{ADMIN_ROWS_PER_PAGE, PageWindow},
    },
};

/// Browse one registered entity
pub async fn browse(
    pool: &PgPool,
    admin: &EntityAdmin,
    search: Option<&str>,
    page: Option<&str>,
) -> Result<(Vec<Value>, PageWindow)> {
    let repo = AdminRepository::new(pool);
    repo.browse(admin, search, page, ADMIN_ROWS_PER_PAGE).await
}

/// Delete one record of a registered entity
pub async fn delete_record(pool: &PgPool, admin: &EntityAdmin, id: i64) -> Result<()> {
    let repo = AdminRepository::new(pool);
    repo.delete(admin, id).await
}

pub async fn create_sport(pool: &PgPool, request: &CreateSportRequest) -> Result<Sport> {
    SportRepository::new(pool).create(request).await
}

pub async fn create_tournament(
    pool: &PgPool,
    request: &CreateTournamentRequest,
) -> Result<Tournament> {
    TournamentRepository::new(pool).create(request).await
}

pub async fn create_team(pool: &PgPool, request: &CreateTeamRequest) -> Result<Team> {
    TeamRepository::new(pool).create(request).await
}

pub async fn create_athlete(pool: &PgPool, request: &CreateAthleteRequest) -> Result<Athlete> {
    AthleteRepository::new(pool).create(request).await
}

pub async fn create_match(pool: &PgPool, request: &CreateMatchRequest) -> Result<Match> {
    MatchRepository::new(pool).create(request).await
}

pub async fn create_participation(
    pool: &PgPool,
    request: &CreateParticipationRequest,
) -> Result<MatchParticipation> {
    ParticipationRepository::new(pool).create(request).await
}

pub async fn create_tag(pool: &PgPool, request: &CreateTagRequest) -> Result<Tag> {
    TagRepository::new(pool).create(request).await
}

/// Record a match's status and score
pub async fn update_match_result(
    pool: &PgPool,
    match_id: i64,
    request: &UpdateMatchResultRequest,
) -> Result<Match> {
    MatchRepository::new(pool)
        .update_result(match_id, request)
        .await
}
