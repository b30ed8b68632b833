use sqlx::PgPool;

use crate::dto::article::TagRef;
use crate::dto::catalog::CreateTagRequest;
use crate::error::{Result, StorageError};
use crate::models::Tag;

pub struct TagRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn for_article(&self, article_id: i64) -> Result<Vec<TagRef>> {
        let tags = sqlx::query_as!(
            TagRef,
            r#"
            SELECT t.tag_id, t.name, t.slug
            FROM article_tags link
            JOIN tags t ON t.tag_id = link.tag_id
            WHERE link.article_id = $1
            ORDER BY t.name
            "#,
            article_id
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    pub async fn create(&self, req: &CreateTagRequest) -> Result<Tag> {
        let tag = sqlx::query_as!(
            Tag,
            r#"
            INSERT INTO tags (name, slug)
            VALUES ($1, $2)
            RETURNING tag_id, name, slug
            "#,
            req.name,
            req.slug
        )
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Slug already exists"))?;

        Ok(tag)
    }
}
