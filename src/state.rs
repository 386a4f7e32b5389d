use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::users::{
    memory::InMemoryUserRepository,
    repo::{PgUserRepository, UserRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let users = match &config.database {
            Some(db_cfg) => {
                let db = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(db_cfg.max_connections)
                    .connect(&db_cfg.url)
                    .await
                    .context("connect to database")?;
                let repo = PgUserRepository::new(db);
                repo.migrate().await.context("run migrations")?;
                info!("using postgres user store");
                Arc::new(repo) as Arc<dyn UserRepository>
            }
            None => {
                info!(capacity = ?config.store_capacity, "using in-memory user store");
                in_memory(config.store_capacity)
            }
        };

        Ok(Self { config, users })
    }

    pub fn from_parts(config: Arc<AppConfig>, users: Arc<dyn UserRepository>) -> Self {
        Self { config, users }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            database: None,
            store_capacity: None,
        });
        Self::from_parts(config, in_memory(None))
    }
}

fn in_memory(capacity: Option<usize>) -> Arc<dyn UserRepository> {
    match capacity {
        Some(n) => Arc::new(InMemoryUserRepository::with_capacity(n)),
        None => Arc::new(InMemoryUserRepository::new()),
    }
}
