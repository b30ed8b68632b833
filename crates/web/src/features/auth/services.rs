use chrono::Duration;
use sqlx::PgPool;
use storage::{
    dto::auth::{LoginRequest, RegisterRequest, SessionResponse, UserResponse},
    error::{Result, StorageError},
    models::User,
    repository::user::UserRepository,
    services::password::{hash_password, verify_password},
};
use uuid::Uuid;

/// Argon2 is deliberately slow, keep it off the async workers
async fn hash_off_thread(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| StorageError::PasswordHash(e.to_string()))?
}

async fn verify_off_thread(password: String, password_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| StorageError::PasswordHash(e.to_string()))?
}

async fn open_session(pool: &PgPool, user: User, ttl: Duration) -> Result<SessionResponse> {
    let session = UserRepository::new(pool)
        .create_session(user.user_id, ttl)
        .await?;

    Ok(SessionResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: UserResponse::from(user),
    })
}

/// Create a regular account and log it in straight away
pub async fn register(
    pool: &PgPool,
    ttl: Duration,
    request: &RegisterRequest,
) -> Result<SessionResponse> {
    let password_hash = hash_off_thread(request.password.clone()).await?;
    let user = UserRepository::new(pool)
        .create(&request.username, &password_hash, false)
        .await?;

    tracing::info!(user_id = user.user_id, "User registered");

    open_session(pool, user, ttl).await
}

/// `None` when the username is unknown or the password is wrong
pub async fn login(
    pool: &PgPool,
    ttl: Duration,
    request: &LoginRequest,
) -> Result<Option<SessionResponse>> {
    let user = match UserRepository::new(pool)
        .find_by_username(&request.username)
        .await
    {
        Ok(user) => user,
        Err(StorageError::NotFound) => return Ok(None),
        Err(e) => return Err(e),
    };

    if !verify_off_thread(request.password.clone(), user.password_hash.clone()).await? {
        tracing::warn!(user_id = user.user_id, "Failed login attempt");
        return Ok(None);
    }

    open_session(pool, user, ttl).await.map(Some)
}

pub async fn logout(pool: &PgPool, token: Uuid) -> Result<()> {
    UserRepository::new(pool).delete_session(token).await
}

/// Make sure the configured superuser account exists
pub async fn ensure_superuser(pool: &PgPool, username: &str, password: &str) -> Result<User> {
    let password_hash = hash_off_thread(password.to_string()).await?;
    UserRepository::new(pool)
        .ensure_superuser(username, &password_hash)
        .await
}
