use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Session, User};

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<User> {
        sqlx::query_as!(
            User,
            r#"
            SELECT user_id, username, password_hash, is_superuser, created_at
            FROM users
            WHERE username = $1
            "#,
            username
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        is_superuser: bool,
    ) -> Result<User> {
        let user = sqlx::query_as!(
            User,
            r#"
            INSERT INTO users (username, password_hash, is_superuser)
            VALUES ($1, $2, $3)
            RETURNING user_id, username, password_hash, is_superuser, created_at
            "#,
            username,
            password_hash,
            is_superuser
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("A user with that username already exists."))?;

        Ok(user)
    }

    /// Create the superuser if the username is free; an existing account is
    /// promoted but keeps its password.
    pub async fn ensure_superuser(&self, username: &str, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as!(
            User,
            r#"
            INSERT INTO users (username, password_hash, is_superuser)
            VALUES ($1, $2, TRUE)
            ON CONFLICT (username) DO UPDATE SET is_superuser = TRUE
            RETURNING user_id, username, password_hash, is_superuser, created_at
            "#,
            username,
            password_hash
        )
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn create_session(&self, user_id: i64, ttl: Duration) -> Result<Session> {
        let session = sqlx::query_as!(
            Session,
            r#"
            INSERT INTO sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, created_at, expires_at
            "#,
            Uuid::new_v4(),
            user_id,
            Utc::now() + ttl
        )
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// Resolve a session token to its user. Unknown and expired tokens both
    /// yield `None`; expired sessions are removed on sight.
    pub async fn find_by_session(&self, token: Uuid, now: DateTime<Utc>) -> Result<Option<User>> {
        let session = sqlx::query_as!(
            Session,
            r#"
            SELECT token, user_id, created_at, expires_at
            FROM sessions
            WHERE token = $1
            "#,
            token
        )
        .fetch_optional(self.pool)
        .await?;

        let Some(session) = session else {
            return Ok(None);
        };

        if session.is_expired(now) {
            self.delete_session(session.token).await?;
            return Ok(None);
        }

        let user = sqlx::query_as!(
            User,
            r#"
            SELECT user_id, username, password_hash, is_superuser, created_at
            FROM users
            WHERE user_id = $1
            "#,
            session.user_id
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn delete_session(&self, token: Uuid) -> Result<()> {
        sqlx::query!("DELETE FROM sessions WHERE token = $1", token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
