use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    /// Cleared when the author account is deleted
    pub author_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub preview_image_url: Option<String>,
    pub match_id: Option<i64>,
}
