use axum::{
    Extension,
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use storage::{
    Database, models::User, repository::user::UserRepository,
    services::authorization::{Requester, require_superuser as require_superuser_privileges},
};
use uuid::Uuid;

use crate::error::WebError;

/// The authenticated user, placed in request extensions by [`require_auth`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub token: Uuid,
}

impl CurrentUser {
    pub fn requester(&self) -> Requester {
        Requester::from(&self.user)
    }
}

/// Extract the session token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Uuid::parse_str(token.trim()).ok()
}

pub async fn require_auth(
    State(db): State<Database>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(WebError::Unauthorized);
    };

    let user = UserRepository::new(db.pool())
        .find_by_session(token, Utc::now())
        .await?;

    let Some(user) = user else {
        tracing::warn!("Invalid or expired session token");
        return Err(WebError::Unauthorized);
    };

    req.extensions_mut().insert(CurrentUser { user, token });

    Ok(next.run(req).await)
}

/// Must run inside [`require_auth`]
pub async fn require_superuser(
    Extension(current): Extension<CurrentUser>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    if let Err(e) = require_superuser_privileges(current.requester()) {
        tracing::warn!(user_id = current.user.user_id, "Non-superuser hit the admin interface");
        return Err(e.into());
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn parses_bearer_token() {
        let token = Uuid::new_v4();
        assert_eq!(bearer_token(&headers(&format!("Bearer {token}"))), Some(token));
        assert_eq!(bearer_token(&headers(&format!("bearer  {token}"))), Some(token));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        let token = Uuid::new_v4();
        assert_eq!(bearer_token(&headers(&format!("Basic {token}"))), None);
        assert_eq!(bearer_token(&headers("Bearer not-a-uuid")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
