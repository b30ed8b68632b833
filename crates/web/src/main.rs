use anyhow::Context;
use storage::Database;
use tokio::net::TcpListener;

use web::config::Config;
use web::features::auth::services::ensure_superuser;
use web::state::{AppState, SessionSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting sports news API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    if let Some(admin) = &config.bootstrap_admin {
        let user = ensure_superuser(db.pool(), &admin.username, &admin.password)
            .await
            .context("Failed to create bootstrap superuser")?;
        tracing::info!(user_id = user.user_id, "Superuser '{}' is available", user.username);
    }

    let state = AppState {
        db,
        sessions: SessionSettings {
            ttl: config.session_ttl,
        },
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    axum::serve(listener, web::app(state))
        .await
        .context("Server error")?;

    Ok(())
}
