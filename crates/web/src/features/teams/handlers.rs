use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::team::TeamDetailResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = i64, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team with roster, matches and news", body = TeamDetailResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let team = services::get_team_detailed(db.pool(), id).await?;

    Ok(Json(team).into_response())
}
