use axum::extract::FromRef;
use chrono::Duration;
use storage::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: SessionSettings,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub ttl: Duration,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for SessionSettings {
    fn from_ref(state: &AppState) -> Self {
        state.sessions
    }
}
