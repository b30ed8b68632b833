use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::auth::{LoginRequest, RegisterRequest, SessionResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::state::SessionSettings;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and logged in", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already taken")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    State(sessions): State<SessionSettings>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let session = services::register(db.pool(), sessions.ttl, &req).await?;

    Ok((StatusCode::CREATED, Json(session)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    State(sessions): State<SessionSettings>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let session = services::login(db.pool(), sessions.ttl, &req)
        .await?
        .ok_or(WebError::Unauthorized)?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session ended"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    services::logout(db.pool(), current.token).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
