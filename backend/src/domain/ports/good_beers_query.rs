//! Driving port for the good beers listing.
//!
//! The HTTP handler depends on this trait only, so it can be exercised with a
//! mock or with the real service over an in-memory store.

use async_trait::async_trait;

use crate::domain::{Beer, Error};

/// Use-case port returning the beers that pass the exclusion filter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GoodBeersQuery: Send + Sync {
    /// Return good beers in store order.
    async fn good_beers(&self) -> Result<Vec<Beer>, Error>;
}
