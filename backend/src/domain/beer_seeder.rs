//! Startup seeding of the beer store.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{BeerPersistenceError, BeerRepository};
use crate::domain::{Beer, BeerName, BeerValidationError, NewBeer};

/// Beers inserted at startup, in insertion order.
pub const SEED_BEER_NAMES: [&str; 8] = [
    "Good Morning",
    "Kentucky Brunch Brand Stout",
    "ManBearPig",
    "King Julius",
    "Very Hazy",
    "Budweiser",
    "Coors Light",
    "PBR",
];

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum BeerSeedingError {
    /// A seed name failed domain validation.
    #[error("seed beer name failed validation: {0}")]
    InvalidName(#[from] BeerValidationError),
    /// The store rejected a write. Seeding stops at the first failure.
    #[error("beer seeding persistence error: {0}")]
    Persistence(#[from] BeerPersistenceError),
}

/// Beers written by a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Persisted beers in insertion order.
    pub beers: Vec<Beer>,
}

/// Writes [`SEED_BEER_NAMES`] through a [`BeerRepository`].
#[derive(Clone)]
pub struct BeerSeeder<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> BeerSeeder<R> {
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> BeerSeeder<R>
where
    R: BeerRepository + ?Sized,
{
    /// Save every seed beer in order.
    ///
    /// # Errors
    ///
    /// Returns [`BeerSeedingError`] on the first failed save; earlier writes
    /// are not rolled back and nothing is retried.
    pub async fn seed(&self) -> Result<SeedOutcome, BeerSeedingError> {
        let mut beers = Vec::with_capacity(SEED_BEER_NAMES.len());
        for raw in SEED_BEER_NAMES {
            let beer = self
                .repository
                .save(NewBeer::new(BeerName::new(raw)?))
                .await?;
            debug!(beer_id = %beer.id(), name = %beer.name(), "seeded beer");
            beers.push(beer);
        }
        Ok(SeedOutcome { beers })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::BeerId;
    use crate::domain::ports::MockBeerRepository;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn saves_seed_names_in_order() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&saved);
        let mut repo = MockBeerRepository::new();
        repo.expect_save().times(8).returning(move |beer| {
            let mut names = recorder.lock().expect("recorder lock");
            names.push(beer.name().to_string());
            let id = i64::try_from(names.len()).expect("small count");
            Ok(beer.into_persisted(BeerId::new(id)))
        });

        let outcome = BeerSeeder::new(Arc::new(repo))
            .seed()
            .await
            .expect("seeding succeeds");

        assert_eq!(*saved.lock().expect("recorder lock"), SEED_BEER_NAMES);
        let ids: Vec<i64> = outcome.beers.iter().map(|beer| beer.id().get()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[rstest]
    #[tokio::test]
    async fn stops_at_first_persistence_failure() {
        let mut repo = MockBeerRepository::new();
        let mut calls = 0_i64;
        repo.expect_save().times(2).returning(move |beer| {
            calls += 1;
            if calls == 2 {
                Err(BeerPersistenceError::connection("connection reset"))
            } else {
                Ok(beer.into_persisted(BeerId::new(calls)))
            }
        });

        let err = BeerSeeder::new(Arc::new(repo))
            .seed()
            .await
            .expect_err("seeding fails");

        assert!(matches!(
            err,
            BeerSeedingError::Persistence(BeerPersistenceError::Connection { .. })
        ));
        assert!(err.to_string().contains("connection reset"));
    }
}
