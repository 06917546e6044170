//! Domain primitives, services and ports.
//!
//! Purpose: hold the beer model and the two use-cases built on it (startup
//! seeding and the good beers listing) without depending on HTTP or SQL.
//!
//! Public surface:
//! - Beer, NewBeer, BeerId, BeerName - the entity and its value types.
//! - BeerSeeder - writes the fixed startup list through the store port.
//! - GoodBeersService - filters the store contents for the listing endpoint.
//! - Error, ErrorCode - transport-agnostic error payload.
//! - TraceId - request correlation identifier.

pub mod beer;
mod beer_seeder;
pub mod error;
mod good_beers;
pub mod ports;
mod trace_id;

pub use self::beer::{Beer, BeerId, BeerName, BeerValidationError, NewBeer};
pub use self::beer_seeder::{BeerSeeder, BeerSeedingError, SEED_BEER_NAMES, SeedOutcome};
pub use self::error::{Error, ErrorCode};
pub use self::good_beers::{EXCLUDED_BEER_NAMES, GoodBeersService, is_good_beer};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
