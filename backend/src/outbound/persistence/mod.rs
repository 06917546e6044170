//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain store port backed by PostgreSQL via
//! Diesel, with async support through `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never reach the domain layer.
//! - **Strongly typed errors**: pool and Diesel errors are mapped to
//!   `BeerPersistenceError`.
//!
//! # Example
//!
//! ```no_run
//! use beers_backend::outbound::persistence::{DbPool, DieselBeerRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/beers")).await?;
//! let repo = DieselBeerRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_beer_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_beer_repository::DieselBeerRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
