use anyhow::{bail, Context, Result};
use std::env;

/// Server and database settings read at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_url = get("DATABASE_URL").context("DATABASE_URL is not set")?;
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = get("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("Invalid PORT value")?;

        let run_migrations = matches!(
            get("RUN_MIGRATIONS").as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("true" | "1" | "yes")
        );

        let db_max_connections = get("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "50".to_string())
            .parse::<u32>()
            .context("Invalid DB_MAX_CONNECTIONS value")?;
        let db_min_connections = get("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse::<u32>()
            .context("Invalid DB_MIN_CONNECTIONS value")?;

        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        Ok(Self {
            database_url,
            host,
            port,
            run_migrations,
            db_max_connections,
            db_min_connections,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
