use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Account sign-up. Mirrors the usual username rules: letters, digits and
/// `@ . + - _`, at most 150 characters.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "The two password fields didn't match"))]
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid = !username.is_empty()
        && username.chars().count() <= 150
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_username");
        error.message = Some(
            "Enter a valid username of at most 150 letters, digits and @/./+/-/_ characters".into(),
        );
        Err(error)
    }
}

impl From<crate::models::User> for UserResponse {
    fn from(user: crate::models::User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, confirmation: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    #[test]
    fn valid_registration() {
        assert!(register("egor.b+news", "labspass1", "labspass1").validate().is_ok());
    }

    #[test]
    fn username_rejects_spaces_and_empty() {
        assert!(register("egor b", "labspass1", "labspass1").validate().is_err());
        assert!(register("", "labspass1", "labspass1").validate().is_err());
        assert!(register(&"a".repeat(151), "labspass1", "labspass1").validate().is_err());
    }

    #[test]
    fn passwords_must_match_and_be_long_enough() {
        let errors = register("egor", "labspass1", "labspass2").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password_confirmation"));
        let errors = register("egor", "short", "short").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
