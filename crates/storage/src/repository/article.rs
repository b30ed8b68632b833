use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::dto::article::{
    ArticleDetailResponse, ArticleSummary, CreateArticleRequest, UpdateArticleRequest,
};
use crate::error::{Result, StorageError};
use crate::models::Article;
use crate::repository::athlete::AthleteRepository;
use crate::repository::game::MatchRepository;
use crate::repository::tag::TagRepository;
use crate::repository::team::TeamRepository;
use crate::services::pagination::PageWindow;
use crate::services::slug::base_slug;

/// Many-to-many link tables hanging off `articles`
#[derive(Debug, Clone, Copy)]
enum ArticleLink {
    Teams,
    Athletes,
    Tags,
}

impl ArticleLink {
    fn table(&self) -> &'static str {
        match self {
            Self::Teams => "article_teams",
            Self::Athletes => "article_athletes",
            Self::Tags => "article_tags",
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Teams => "team_id",
            Self::Athletes => "athlete_id",
            Self::Tags => "tag_id",
        }
    }
}

pub struct ArticleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every article, drafts included
    pub fn all(&self) -> ArticleView<'a> {
        ArticleView {
            pool: self.pool,
            published_only: false,
        }
    }

    /// Only articles with `is_published` set. Reads the table on every call.
    pub fn published(&self) -> ArticleView<'a> {
        ArticleView {
            pool: self.pool,
            published_only: true,
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Article> {
        sqlx::query_as!(
            Article,
            r#"
            SELECT article_id, title, slug, content, author_id, created_at, updated_at,
                   is_published, preview_image_url, match_id
            FROM articles
            WHERE slug = $1
            "#,
            slug
        )
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Article with author, linked match, teams, athletes and tags resolved
    pub async fn find_by_slug_detailed(&self, slug: &str) -> Result<ArticleDetailResponse> {
        let article = self.find_by_slug(slug).await?;

        let author_username = match article.author_id {
            Some(author_id) => {
                sqlx::query_scalar!("SELECT username FROM users WHERE user_id = $1", author_id)
                    .fetch_optional(self.pool)
                    .await?
            }
            None => None,
        };

        let linked_match = match article.match_id {
            Some(match_id) => Some(MatchRepository::new(self.pool).find_summary(match_id).await?),
            None => None,
        };

        let teams = TeamRepository::new(self.pool)
            .for_article(article.article_id)
            .await?;
        let athletes = AthleteRepository::new(self.pool)
            .for_article(article.article_id)
            .await?;
        let tags = TagRepository::new(self.pool)
            .for_article(article.article_id)
            .await?;

        Ok(ArticleDetailResponse {
            article_id: article.article_id,
            title: article.title,
            slug: article.slug,
            content: article.content,
            author_id: article.author_id,
            author_username,
            created_at: article.created_at,
            updated_at: article.updated_at,
            is_published: article.is_published,
            preview_image_url: article.preview_image_url,
            linked_match,
            teams,
            athletes,
            tags,
        })
    }

    /// Generate a slug from the title, suffixed with a counter until unique
    pub async fn generate_unique_slug(&self, title: &str) -> Result<String> {
        let base_slug = base_slug(title, "article");

        let mut final_slug = base_slug.clone();
        let mut counter = 2;

        while sqlx::query_scalar!(
            r#"SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1) as "exists!""#,
            final_slug
        )
        .fetch_one(self.pool)
        .await?
        {
            final_slug = format!("{}-{}", base_slug, counter);
            counter += 1;
        }

        Ok(final_slug)
    }

    /// Create an article written by `author_id` together with its relations.
    ///
    /// A generated slug can be taken by a concurrent writer between the
    /// uniqueness check and the insert; that case is retried with the next
    /// free suffix. An explicit slug that is taken is a conflict.
    pub async fn create(&self, author_id: i64, req: &CreateArticleRequest) -> Result<Article> {
        let mut attempt = 1;

        loop {
            let slug = match &req.slug {
                Some(slug) => slug.clone(),
                None => self.generate_unique_slug(&req.title).await?,
            };

            match self.insert(author_id, &slug, req).await {
                Ok(article) => return Ok(article),
                Err(e) if retries_generated_slug(&e, req.slug.is_some(), attempt) => {
                    tracing::warn!(slug = %slug, "Generated slug was taken concurrently, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e.on_conflict("Slug already exists")),
            }
        }
    }

    async fn insert(&self, author_id: i64, slug: &str, req: &CreateArticleRequest) -> Result<Article> {
        let mut tx = self.pool.begin().await?;

        let article = sqlx::query_as!(
            Article,
            r#"
            INSERT INTO articles (title, slug, content, author_id, is_published,
                                  preview_image_url, match_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING article_id, title, slug, content, author_id, created_at, updated_at,
                      is_published, preview_image_url, match_id
            "#,
            req.title,
            slug,
            req.content,
            author_id,
            req.is_published,
            req.preview_image_url,
            req.match_id
        )
        .fetch_one(&mut *tx)
        .await?;

        replace_links(&mut tx, ArticleLink::Teams, article.article_id, &req.team_ids).await?;
        replace_links(&mut tx, ArticleLink::Athletes, article.article_id, &req.athlete_ids).await?;
        replace_links(&mut tx, ArticleLink::Tags, article.article_id, &req.tag_ids).await?;

        tx.commit().await?;

        Ok(article)
    }

    /// Apply a partial update. Absent fields keep their value, an explicit
    /// `null` clears the nullable ones, and relation lists that are present
    /// replace the old ones.
    pub async fn update(&self, existing: &Article, req: &UpdateArticleRequest) -> Result<Article> {
        let title = req.title.as_ref().unwrap_or(&existing.title);
        let slug = req.slug.as_ref().unwrap_or(&existing.slug);
        let content = req.content.as_ref().unwrap_or(&existing.content);
        let is_published = req.is_published.unwrap_or(existing.is_published);
        let preview_image_url = match &req.preview_image_url {
            Some(value) => value.as_ref(),
            None => existing.preview_image_url.as_ref(),
        };
        let match_id = req.match_id.unwrap_or(existing.match_id);

        let mut tx = self.pool.begin().await?;

        let article = sqlx::query_as!(
            Article,
            r#"
            UPDATE articles
            SET title = $2,
                slug = $3,
                content = $4,
                is_published = $5,
                preview_image_url = $6,
                match_id = $7,
                updated_at = NOW()
            WHERE article_id = $1
            RETURNING article_id, title, slug, content, author_id, created_at, updated_at,
                      is_published, preview_image_url, match_id
            "#,
            existing.article_id,
            title,
            slug,
            content,
            is_published,
            preview_image_url,
            match_id
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_conflict("Slug already exists"))?
        .ok_or(StorageError::NotFound)?;

        if let Some(team_ids) = &req.team_ids {
            replace_links(&mut tx, ArticleLink::Teams, article.article_id, team_ids).await?;
        }
        if let Some(athlete_ids) = &req.athlete_ids {
            replace_links(&mut tx, ArticleLink::Athletes, article.article_id, athlete_ids).await?;
        }
        if let Some(tag_ids) = &req.tag_ids {
            replace_links(&mut tx, ArticleLink::Tags, article.article_id, tag_ids).await?;
        }

        tx.commit().await?;

        Ok(article)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query!("DELETE FROM articles WHERE article_id = $1", id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Attempts allowed for an insert whose slug was generated
const GENERATED_SLUG_ATTEMPTS: u32 = 2;

fn retries_generated_slug(error: &StorageError, explicit_slug: bool, attempt: u32) -> bool {
    !explicit_slug && attempt < GENERATED_SLUG_ATTEMPTS && error.is_unique_violation()
}

async fn replace_links(
    conn: &mut PgConnection,
    link: ArticleLink,
    article_id: i64,
    ids: &[i64],
) -> Result<()> {
    sqlx::query(&format!(
        "DELETE FROM {} WHERE article_id = $1",
        link.table()
    ))
    .bind(article_id)
    .execute(&mut *conn)
    .await?;

    if ids.is_empty() {
        return Ok(());
    }

    sqlx::query(&format!(
        r#"
        INSERT INTO {table} (article_id, {column})
        SELECT $1, UNNEST($2::BIGINT[])
        ON CONFLICT DO NOTHING
        "#,
        table = link.table(),
        column = link.column(),
    ))
    .bind(article_id)
    .bind(ids)
    .execute(&mut *conn)
    .await
    .map_err(|e| StorageError::from(e).on_conflict("Duplicate relation"))?;

    Ok(())
}

/// A read-only slice of the articles table, newest first. Obtained from
/// [`ArticleRepository::all`] or [`ArticleRepository::published`].
pub struct ArticleView<'a> {
    pool: &'a PgPool,
    published_only: bool,
}

impl<'a> ArticleView<'a> {
    fn select_summaries(&self) -> QueryBuilder<'a, Postgres> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT a.article_id, a.title, a.slug, u.username AS author_username,
                   a.created_at, a.is_published, a.preview_image_url
            FROM articles a
            LEFT JOIN users u ON u.user_id = a.author_id
            WHERE 1=1
            "#,
        );
        if self.published_only {
            query.push(" AND a.is_published");
        }
        query
    }

    pub async fn count(&self) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM articles a WHERE 1=1");
        if self.published_only {
            query.push(" AND a.is_published");
        }

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Resolve `token` against the current row count and fetch that page
    pub async fn page(
        &self,
        token: Option<&str>,
        per_page: u32,
    ) -> Result<(Vec<ArticleSummary>, PageWindow)> {
        let total_items = self.count().await?;
        let window = PageWindow::resolve(token, total_items, per_page);

        let mut query = self.select_summaries();
        query.push(" ORDER BY a.created_at DESC, a.article_id DESC LIMIT ");
        query.push_bind(window.limit());
        query.push(" OFFSET ");
        query.push_bind(window.offset());

        let articles = query.build_query_as().fetch_all(self.pool).await?;

        Ok((articles, window))
    }

    pub async fn latest(&self, count: i64) -> Result<Vec<ArticleSummary>> {
        let mut query = self.select_summaries();
        query.push(" ORDER BY a.created_at DESC, a.article_id DESC LIMIT ");
        query.push_bind(count);

        let articles = query.build_query_as().fetch_all(self.pool).await?;

        Ok(articles)
    }

    /// Articles that reference the given team
    pub async fn for_team(&self, team_id: i64) -> Result<Vec<ArticleSummary>> {
        let mut query = self.select_summaries();
        query.push(
            " AND EXISTS (SELECT 1 FROM article_teams link \
             WHERE link.article_id = a.article_id AND link.team_id = ",
        );
        query.push_bind(team_id);
        query.push(") ORDER BY a.created_at DESC, a.article_id DESC");

        let articles = query.build_query_as().fetch_all(self.pool).await?;

        Ok(articles)
    }
}
