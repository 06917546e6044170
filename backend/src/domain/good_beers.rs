//! Good beers filtering.
//!
//! A beer is "good" unless its name exactly matches one of a few mass-market
//! lagers. Matching is case-sensitive: `"budweiser"` passes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BeerPersistenceError, BeerRepository, GoodBeersQuery};
use crate::domain::{Beer, BeerName, Error};

/// Names excluded from the good beers listing.
pub const EXCLUDED_BEER_NAMES: [&str; 3] = ["Budweiser", "Coors Light", "PBR"];

/// Return whether a beer with this name belongs in the good beers listing.
///
/// # Examples
/// ```
/// use beers_backend::domain::{BeerName, is_good_beer};
///
/// let name = |raw: &str| BeerName::new(raw).expect("valid name");
/// assert!(is_good_beer(&name("King Julius")));
/// assert!(!is_good_beer(&name("Coors Light")));
/// assert!(is_good_beer(&name("coors light")));
/// ```
#[must_use]
pub fn is_good_beer(name: &BeerName) -> bool {
    !EXCLUDED_BEER_NAMES.contains(&name.as_ref())
}

/// [`GoodBeersQuery`] backed by a [`BeerRepository`].
#[derive(Clone)]
pub struct GoodBeersService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> GoodBeersService<R> {
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: BeerPersistenceError) -> Error {
    match error {
        BeerPersistenceError::Connection { message } => Error::service_unavailable(message),
        BeerPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> GoodBeersQuery for GoodBeersService<R>
where
    R: BeerRepository + ?Sized,
{
    async fn good_beers(&self) -> Result<Vec<Beer>, Error> {
        let beers = self
            .repository
            .find_all()
            .await
            .map_err(map_persistence_error)?;
        let total = beers.len();
        let good: Vec<Beer> = beers
            .into_iter()
            .filter(|beer| is_good_beer(beer.name()))
            .collect();
        debug!(total, good = good.len(), "filtered good beers");
        Ok(good)
    }
}
