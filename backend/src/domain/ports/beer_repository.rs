//! Driven port for beer persistence.
//!
//! Adapters assign identities on insertion and hand persisted records back to
//! the domain. Isolation between concurrent callers is whatever the backing
//! store provides; the port adds no locking or retry of its own.

use async_trait::async_trait;

use crate::domain::{Beer, NewBeer};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by beer store adapters.
    pub enum BeerPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "beer store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "beer store query failed: {message}",
    }
}

/// Port for storing and listing beers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Persist a beer and return it with its newly assigned identifier.
    async fn save(&self, beer: NewBeer) -> Result<Beer, BeerPersistenceError>;

    /// Return every persisted beer in ascending identifier order.
    async fn find_all(&self) -> Result<Vec<Beer>, BeerPersistenceError>;
}
