//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod beer_repository;
mod good_beers_query;

#[cfg(test)]
pub use beer_repository::MockBeerRepository;
pub use beer_repository::{BeerPersistenceError, BeerRepository};
#[cfg(test)]
pub use good_beers_query::MockGoodBeersQuery;
pub use good_beers_query::GoodBeersQuery;
