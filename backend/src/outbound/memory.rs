//! Process-local beer store.
//!
//! Used when no database URL is configured and by tests that exercise the
//! HTTP surface without PostgreSQL. Identifiers start at 1 and increase by one
//! per save, so listing order equals insertion order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{BeerPersistenceError, BeerRepository};
use crate::domain::{Beer, BeerId, NewBeer};

#[derive(Debug, Default)]
struct StoreState {
    last_id: i64,
    beers: Vec<Beer>,
}

/// In-memory [`BeerRepository`].
///
/// # Examples
/// ```
/// use beers_backend::domain::ports::BeerRepository;
/// use beers_backend::domain::{BeerName, NewBeer};
/// use beers_backend::outbound::memory::InMemoryBeerRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryBeerRepository::new();
/// let name = BeerName::new("Very Hazy").expect("valid name");
/// let beer = store.save(NewBeer::new(name)).await.expect("save");
/// assert_eq!(beer.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBeerRepository {
    state: Mutex<StoreState>,
}

impl InMemoryBeerRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, BeerPersistenceError> {
        self.state
            .lock()
            .map_err(|_| BeerPersistenceError::connection("in-memory beer store lock poisoned"))
    }
}

#[async_trait]
impl BeerRepository for InMemoryBeerRepository {
    async fn save(&self, beer: NewBeer) -> Result<Beer, BeerPersistenceError> {
        let mut state = self.lock()?;
        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| BeerPersistenceError::query("beer identifier space exhausted"))?;
        state.last_id = next;
        let stored = beer.into_persisted(BeerId::new(next));
        state.beers.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Beer>, BeerPersistenceError> {
        Ok(self.lock()?.beers.clone())
    }
}
