use anyhow::{Context, Result};
use chrono::Duration;

const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub session_ttl: Duration,
    pub bootstrap_admin: Option<AdminCredentials>,
}

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let session_ttl_hours = match lookup("SESSION_TTL_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .context("SESSION_TTL_HOURS must be a number")?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };
        anyhow::ensure!(session_ttl_hours > 0, "SESSION_TTL_HOURS must be positive");

        let bootstrap_admin = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(AdminCredentials { username, password })
            }
            _ => None,
        };

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            session_ttl: Duration::hours(session_ttl_hours),
            bootstrap_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://news@localhost/news"),
    ];

    #[test]
    fn loads_required_values_with_defaults() {
        let config = Config::from_lookup(lookup(&BASE)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_ttl, Duration::hours(168));
        assert!(config.bootstrap_admin.is_none());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&BASE[..2])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let mut vars = BASE.to_vec();
        vars[1] = ("PORT", "eighty");
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn admin_needs_both_username_and_password() {
        let mut vars = BASE.to_vec();
        vars.push(("ADMIN_USERNAME", "admin"));
        assert!(Config::from_lookup(lookup(&vars)).unwrap().bootstrap_admin.is_none());

        vars.push(("ADMIN_PASSWORD", "labspass"));
        let admin = Config::from_lookup(lookup(&vars)).unwrap().bootstrap_admin.unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[test]
    fn session_ttl_override() {
        let mut vars = BASE.to_vec();
        vars.push(("SESSION_TTL_HOURS", "2"));
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.session_ttl, Duration::hours(2));

        vars.pop();
        vars.push(("SESSION_TTL_HOURS", "0"));
        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
