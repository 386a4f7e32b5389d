use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Postgres backend when set, in-memory store otherwise.
    pub database: Option<DatabaseConfig>,
    pub store_capacity: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match get("APP_PORT") {
            Some(v) => v.parse::<u16>().context("APP_PORT")?,
            None => 8080,
        };

        let database = match get("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: match get("DATABASE_MAX_CONNECTIONS") {
                    Some(v) => v.parse::<u32>().context("DATABASE_MAX_CONNECTIONS")?,
                    None => 10,
                },
            }),
            None => None,
        };

        let store_capacity = get("USER_STORE_CAPACITY")
            .map(|v| v.parse::<usize>().context("USER_STORE_CAPACITY"))
            .transpose()?;

        Ok(Self {
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            database,
            store_capacity,
        })
    }
}
