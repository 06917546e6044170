//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested without I/O.

use std::sync::Arc;

use crate::domain::GoodBeersService;
use crate::domain::ports::{BeerRepository, GoodBeersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub good_beers: Arc<dyn GoodBeersQuery>,
}

impl HttpState {
    pub fn new(good_beers: Arc<dyn GoodBeersQuery>) -> Self {
        Self { good_beers }
    }

    /// Wire the handlers to the good beers service over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use beers_backend::inbound::http::state::HttpState;
    /// use beers_backend::outbound::memory::InMemoryBeerRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryBeerRepository::new()));
    /// let _query = state.good_beers.clone();
    /// ```
    pub fn from_repository(repository: Arc<dyn BeerRepository>) -> Self {
        Self::new(Arc::new(GoodBeersService::new(repository)))
    }
}
