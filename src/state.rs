use crate::{
    config::{Config, ConnectionManager},
    di::DependenciesInject,
};
use anyhow::{Context, Result};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Connecting to database at {}", config.db_host);

        let pool = ConnectionManager::new_pool(&config.database_url())
            .await
            .context("Failed to create connection pool")?;

        let di_container = DependenciesInject::new(pool);

        Ok(Self { di_container })
    }
}
