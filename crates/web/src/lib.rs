use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod routes;
pub mod state;

use features::{admin, articles, auth, home, teams};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::handlers::home,
        home::handlers::stats,
        articles::handlers::list_articles,
        articles::handlers::get_article,
        articles::handlers::create_article,
        articles::handlers::update_article,
        articles::handlers::delete_article,
        teams::handlers::get_team,
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::logout,
        admin::handlers::list_entities,
        admin::handlers::browse,
        admin::handlers::create_record,
        admin::handlers::delete_record,
        admin::handlers::update_match_result,
    ),
    components(
        schemas(
            storage::dto::article::ArticleSummary,
            storage::dto::article::ArticleDetailResponse,
            storage::dto::article::CreateArticleRequest,
            storage::dto::article::UpdateArticleRequest,
            storage::dto::article::TeamRef,
            storage::dto::article::AthleteRef,
            storage::dto::article::TagRef,
            storage::dto::home::HomeResponse,
            storage::dto::home::StatsResponse,
            storage::dto::home::MatchSummary,
            storage::dto::home::TeamCity,
            storage::dto::team::TeamDetailResponse,
            storage::dto::team::TeamMatchEntry,
            storage::dto::auth::RegisterRequest,
            storage::dto::auth::LoginRequest,
            storage::dto::auth::SessionResponse,
            storage::dto::auth::UserResponse,
            storage::dto::catalog::CreateSportRequest,
            storage::dto::catalog::CreateTournamentRequest,
            storage::dto::catalog::CreateTeamRequest,
            storage::dto::catalog::CreateAthleteRequest,
            storage::dto::catalog::CreateMatchRequest,
            storage::dto::catalog::UpdateMatchResultRequest,
            storage::dto::catalog::CreateParticipationRequest,
            storage::dto::catalog::CreateTagRequest,
            storage::dto::admin::EntityAdminInfo,
            storage::dto::admin::AdminPage,
            storage::dto::common::PaginationMeta,
            storage::models::Sport,
            storage::models::Tournament,
            storage::models::Team,
            storage::models::Athlete,
            storage::models::Match,
            storage::models::MatchStatus,
            storage::models::MatchParticipation,
            storage::models::Article,
            storage::models::Tag,
        )
    ),
    tags(
        (name = "pages", description = "Home and stats pages"),
        (name = "articles", description = "Published news and article editing"),
        (name = "teams", description = "Team pages"),
        (name = "auth", description = "Registration and sessions"),
        (name = "admin", description = "Superuser record management"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

/// Full application router with state applied
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(routes::configure(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
