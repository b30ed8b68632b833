use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use storage::{
    Database,
    dto::{
        admin::{AdminBrowseQuery, AdminPage, EntityAdminInfo},
        catalog::UpdateMatchResultRequest,
    },
    models::Match,
    services::admin_site::{ADMIN_SITE, EntityAdmin, find_entity},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

fn registered(entity: &str) -> Result<&'static EntityAdmin, WebError> {
    find_entity(entity).ok_or(WebError::NotFound)
}

/// Deserialize and validate a typed create payload out of a generic body
fn parse<T: DeserializeOwned + Validate>(body: Value) -> Result<T, WebError> {
    let request: T =
        serde_json::from_value(body).map_err(|e| WebError::BadRequest(e.to_string()))?;
    request.validate()?;
    Ok(request)
}

fn created<T: Serialize>(record: T) -> Response {
    (StatusCode::CREATED, Json(record)).into_response()
}

#[utoipa::path(
    get,
    path = "/api/admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registered entities and their admin configuration", body = Vec<EntityAdminInfo>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser privileges required")
    ),
    tag = "admin"
)]
pub async fn list_entities() -> Json<Vec<EntityAdminInfo>> {
    Json(ADMIN_SITE.iter().map(EntityAdmin::info).collect())
}

#[utoipa::path(
    get,
    path = "/api/admin/{entity}",
    params(
        ("entity" = String, Path, description = "Registered entity name"),
        AdminBrowseQuery
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "One page of records, list_display columns only", body = AdminPage),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser privileges required"),
        (status = 404, description = "Unknown entity")
    ),
    tag = "admin"
)]
pub async fn browse(
    State(db): State<Database>,
    Path(entity): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let query = AdminBrowseQuery::from(pairs);
    let admin = registered(&entity)?;

    let (rows, window) = services::browse(
        db.pool(),
        admin,
        query.q.as_deref(),
        query.page.as_deref(),
    )
    .await?;

    Ok(Json(AdminPage::new(rows, window)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/{entity}",
    params(
        ("entity" = String, Path, description = "sports, tournaments, teams, athletes, matches, participations or tags")
    ),
    request_body = Value,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Record created"),
        (status = 400, description = "Malformed or invalid payload"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser privileges required"),
        (status = 404, description = "Entity cannot be created here"),
        (status = 409, description = "Slug already exists or a referenced record is missing")
    ),
    tag = "admin"
)]
pub async fn create_record(
    State(db): State<Database>,
    Path(entity): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, WebError> {
    let pool = db.pool();

    let response = match entity.as_str() {
        "sports" => created(services::create_sport(pool, &parse(body)?).await?),
        "tournaments" => created(services::create_tournament(pool, &parse(body)?).await?),
        "teams" => created(services::create_team(pool, &parse(body)?).await?),
        "athletes" => created(services::create_athlete(pool, &parse(body)?).await?),
        "matches" => created(services::create_match(pool, &parse(body)?).await?),
        "participations" => created(services::create_participation(pool, &parse(body)?).await?),
        "tags" => created(services::create_tag(pool, &parse(body)?).await?),
        _ => return Err(WebError::NotFound),
    };

    tracing::info!(entity = %entity, "Record created through admin");

    Ok(response)
}

#[utoipa::path(
    delete,
    path = "/api/admin/{entity}/{id}",
    params(
        ("entity" = String, Path, description = "Registered entity name"),
        ("id" = i64, Path, description = "Primary key")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Record deleted, dependants cascaded"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser privileges required"),
        (status = 404, description = "Unknown entity or record")
    ),
    tag = "admin"
)]
pub async fn delete_record(
    State(db): State<Database>,
    Path((entity, id)): Path<(String, i64)>,
) -> Result<Response, WebError> {
    let admin = registered(&entity)?;

    services::delete_record(db.pool(), admin, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    patch,
    path = "/api/admin/matches/{id}/result",
    params(
        ("id" = i64, Path, description = "Match id")
    ),
    request_body = UpdateMatchResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match result recorded", body = Match),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Superuser privileges required"),
        (status = 404, description = "Match not found")
    ),
    tag = "admin"
)]
pub async fn update_match_result(
    State(db): State<Database>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMatchResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_match_result(db.pool(), id, &req).await?;

    Ok(Json(updated).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storage::dto::catalog::CreateTeamRequest;

    #[test]
    fn parse_rejects_malformed_payload() {
        let err = parse::<CreateTeamRequest>(json!({"name": "Zenit"})).unwrap_err();
        assert!(matches!(err, WebError::BadRequest(_)));
    }

    #[test]
    fn parse_rejects_invalid_payload() {
        let err = parse::<CreateTeamRequest>(json!({
            "name": "Zenit",
            "sport_id": 1,
            "slug": "Not A Slug"
        }))
        .unwrap_err();
        assert!(matches!(err, WebError::Validation(_)));
    }

    #[test]
    fn parse_accepts_valid_payload() {
        let team = parse::<CreateTeamRequest>(json!({
            "name": "Zenit",
            "sport_id": 1,
            "city": "Saint Petersburg",
            "slug": "zenit"
        }))
        .unwrap();
        assert_eq!(team.short_name, "");
        assert_eq!(team.city, "Saint Petersburg");
    }

    #[test]
    fn unknown_entity_is_not_found() {
        assert!(matches!(registered("sessions"), Err(WebError::NotFound)));
        assert!(registered("teams").is_ok());
    }
}
