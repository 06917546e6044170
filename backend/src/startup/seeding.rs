//! Startup seeding orchestration.

use std::sync::Arc;

use tracing::info;

use super::StartupError;
use crate::domain::ports::BeerRepository;
use crate::domain::{BeerSeeder, SeedOutcome};

/// Seed the store when `enabled`, then log every stored beer.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use beers_backend::outbound::memory::InMemoryBeerRepository;
/// use beers_backend::startup::seed_on_startup;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let outcome = seed_on_startup(Arc::new(InMemoryBeerRepository::new()), true)
///     .await
///     .expect("seeding succeeds");
/// assert_eq!(outcome.map(|o| o.beers.len()), Some(8));
/// # });
/// ```
///
/// # Errors
///
/// Returns [`StartupError`] when a seed write or the follow-up listing fails.
pub async fn seed_on_startup(
    repository: Arc<dyn BeerRepository>,
    enabled: bool,
) -> Result<Option<SeedOutcome>, StartupError> {
    if !enabled {
        info!(reason = "disabled", "beer seeding skipped");
        return Ok(None);
    }

    let outcome = BeerSeeder::new(Arc::clone(&repository)).seed().await?;
    info!(seeded = outcome.beers.len(), "beer seeding applied");

    for beer in repository.find_all().await? {
        info!(beer_id = %beer.id(), name = %beer.name(), "stored beer");
    }

    Ok(Some(outcome))
}
