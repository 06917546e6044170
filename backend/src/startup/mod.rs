//! Startup wiring: settings, store selection and seeding.

mod config;
mod seeding;
mod store;

use thiserror::Error;

use crate::domain::BeerSeedingError;
use crate::domain::ports::BeerPersistenceError;
use crate::outbound::persistence::{MigrationError, PoolError};

pub use config::ServerSettings;
pub use seeding::seed_on_startup;
pub use store::build_beer_repository;

/// Errors that stop the service before it starts listening.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Schema migrations could not be applied.
    #[error("database migration failed: {0}")]
    Migration(#[from] MigrationError),
    /// The connection pool could not be built.
    #[error("database pool unavailable: {0}")]
    Pool(#[from] PoolError),
    /// Writing the seed beers failed.
    #[error("startup seeding failed: {0}")]
    Seeding(#[from] BeerSeedingError),
    /// Reading the store back after seeding failed.
    #[error("failed to list seeded beers: {0}")]
    Listing(#[from] BeerPersistenceError),
}

impl From<StartupError> for std::io::Error {
    fn from(error: StartupError) -> Self {
        Self::other(error)
    }
}
