use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        article::{ArticleDetailResponse, ArticleSummary, CreateArticleRequest, UpdateArticleRequest},
        common::{PageQuery, PaginatedResponse},
    },
    models::Article,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/articles",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of published articles, newest first. Invalid page numbers fall back to the first or last page.", body = PaginatedResponse<ArticleSummary>)
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(db): State<Database>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, WebError> {
    let query = PageQuery::from(pairs);
    let (articles, window) = services::list_published(db.pool(), query.page.as_deref()).await?;

    Ok(Json(PaginatedResponse::new(articles, window)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article found", body = ArticleDetailResponse),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let article = services::get_article_detailed(db.pool(), &slug).await?;

    Ok(Json(article).into_response())
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Article created, authored by the caller", body = Article),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "articles"
)]
pub async fn create_article(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<CreateArticleRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let article = services::create_article(db.pool(), current.requester(), &req).await?;

    Ok((StatusCode::CREATED, Json(article)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    request_body = UpdateArticleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Article updated successfully", body = Article),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is neither the author nor a superuser"),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "articles"
)]
pub async fn update_article(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    Path(slug): Path<String>,
    Json(update_req): Json<UpdateArticleRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated =
        services::update_article(db.pool(), current.requester(), &slug, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Article deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is neither the author nor a superuser"),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn delete_article(
    State(db): State<Database>,
    Extension(current): Extension<CurrentUser>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_article(db.pool(), current.requester(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
