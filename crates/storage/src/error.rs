use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turns unique and foreign-key violations into `ConstraintViolation`
    /// carrying a caller-facing message, leaving other errors untouched.
    pub fn on_conflict(self, unique_message: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(unique_message.to_string())
        } else if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation("Referenced record does not exist".to_string())
        } else {
            self
        }
    }
}

impl From<argon2::password_hash::Error> for StorageError {
    fn from(error: argon2::password_hash::Error) -> Self {
        StorageError::PasswordHash(error.to_string())
    }
}
