//! Beer store selection.

use std::sync::Arc;

use tracing::{info, warn};

use super::StartupError;
use super::config::ServerSettings;
use crate::domain::ports::BeerRepository;
use crate::outbound::memory::InMemoryBeerRepository;
use crate::outbound::persistence::{DbPool, DieselBeerRepository, PoolConfig, run_migrations};

fn pool_config(database_url: &str, settings: &ServerSettings) -> PoolConfig {
    let config = PoolConfig::new(database_url);
    match settings.db_max_connections {
        Some(max_size) => config.with_max_size(max_size),
        None => config,
    }
}

/// Build the beer store described by `settings`.
///
/// With a database URL, pending migrations are applied and a pooled Diesel
/// store is returned. Without one, beers live in process memory and are lost
/// on exit.
///
/// # Errors
///
/// Returns [`StartupError`] when migrations fail or the pool cannot be built.
pub async fn build_beer_repository(
    settings: &ServerSettings,
) -> Result<Arc<dyn BeerRepository>, StartupError> {
    let Some(database_url) = settings.database_url() else {
        warn!("BEERS_DATABASE_URL is not set; using the in-memory beer store");
        return Ok(Arc::new(InMemoryBeerRepository::new()));
    };

    run_migrations(database_url).await?;
    let config = pool_config(database_url, settings);
    info!(max_connections = config.max_size(), "connecting beer store pool");
    let pool = DbPool::new(config).await?;
    Ok(Arc::new(DieselBeerRepository::new(pool)))
}
