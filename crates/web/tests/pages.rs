//! Paged listings served against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Duration;
use serde_json::Value;
use sqlx::PgPool;
use storage::{
    Database,
    dto::article::CreateArticleRequest,
    repository::{article::ArticleRepository, user::UserRepository},
};
use tower::ServiceExt;
use web::state::{AppState, SessionSettings};

const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA";

fn app(pool: PgPool) -> Router {
    web::app(AppState {
        db: Database::from_pool(pool),
        sessions: SessionSettings {
            ttl: Duration::hours(1),
        },
    })
}

async fn get(app: Router, uri: &str, token: Option<String>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn repeated_page_parameter_serves_the_last_one(pool: PgPool) {
    let author = UserRepository::new(&pool)
        .create("reporter", HASH, false)
        .await
        .unwrap();

    let articles = ArticleRepository::new(&pool);
    for round in 0..7 {
        let req = CreateArticleRequest {
            title: format!("Round {round}"),
            slug: None,
            content: "Match report".into(),
            is_published: true,
            preview_image_url: None,
            match_id: None,
            team_ids: vec![],
            athlete_ids: vec![],
            tag_ids: vec![],
        };
        articles.create(author.user_id, &req).await.unwrap();
    }

    let (status, body) = get(app(pool), "/api/articles?page=1&page=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[sqlx::test(migrations = "../storage/migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn repeated_admin_search_uses_the_last_term(pool: PgPool) {
    let users = UserRepository::new(&pool);
    let admin = users.create("admin", HASH, true).await.unwrap();
    users.create("reporter", HASH, false).await.unwrap();
    let session = users
        .create_session(admin.user_id, Duration::hours(1))
        .await
        .unwrap();

    let (status, body) = get(
        app(pool),
        "/api/admin/users?q=nobody&q=report&page=3&page=1",
        Some(session.token.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["username"], "reporter");
}
