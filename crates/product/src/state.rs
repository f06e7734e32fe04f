use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::{Config, ConnectionManager, ConnectionPool};
use std::fmt;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pool: ConnectionPool,
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(
            &config.database_url,
            config.db_min_conn,
            config.db_max_conn,
        )
        .await
        .context("Failed to initialize database pool")?;

        if config.run_migrations {
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
        }

        let di_container = DependenciesInject::new(pool.clone());

        Ok(Self { pool, di_container })
    }
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📜 Running product migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
