use sqlx::PgPool;
use storage::{
    dto::article::{
        ArticleDetailResponse, ArticleSummary, CreateArticleRequest, UpdateArticleRequest,
    },
    error::Result,
    models::Article,
    repository::article::ArticleRepository,
    services::{
        authorization::{ArticleAction, Requester, authorize_article},
        pagination::{ARTICLES_PER_PAGE, PageWindow},
    },
};

/// One page of the published view; a bad page token never fails
pub async fn list_published(
    pool: &PgPool,
    page: Option<&str>,
) -> Result<(Vec<ArticleSummary>, PageWindow)> {
    let repo = ArticleRepository::new(pool);
    repo.published().page(page, ARTICLES_PER_PAGE).await
}

/// Get article with its relations by slug
pub async fn get_article_detailed(pool: &PgPool, slug: &str) -> Result<ArticleDetailResponse> {
    let repo = ArticleRepository::new(pool);
    repo.find_by_slug_detailed(slug).await
}

/// Create an article authored by the requester
pub async fn create_article(
    pool: &PgPool,
    requester: Requester,
    request: &CreateArticleRequest,
) -> Result<Article> {
    let repo = ArticleRepository::new(pool);
    let article = repo.create(requester.user_id, request).await?;

    tracing::info!(
        article_id = article.article_id,
        author_id = requester.user_id,
        "Article created"
    );

    Ok(article)
}

/// Update an article after checking the requester may edit it
pub async fn update_article(
    pool: &PgPool,
    requester: Requester,
    slug: &str,
    request: &UpdateArticleRequest,
) -> Result<Article> {
    let repo = ArticleRepository::new(pool);

    let existing = repo.find_by_slug(slug).await?;
    authorize_article(requester, &existing, ArticleAction::Update)?;

    repo.update(&existing, request).await
}

/// Delete an article after checking the requester may delete it
pub async fn delete_article(pool: &PgPool, requester: Requester, slug: &str) -> Result<()> {
    let repo = ArticleRepository::new(pool);

    let article = repo.find_by_slug(slug).await?;
    authorize_article(requester, &article, ArticleAction::Delete)?;

    repo.delete(article.article_id).await?;

    tracing::info!(
        article_id = article.article_id,
        user_id = requester.user_id,
        "Article deleted"
    );

    Ok(())
}
