//! PostgreSQL-backed `BeerRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BeerPersistenceError, BeerRepository};
use crate::domain::{Beer, NewBeer};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BeerRow, NewBeerRow};
use super::pool::DbPool;
use super::schema::beers;

/// Diesel implementation of [`BeerRepository`].
#[derive(Clone)]
pub struct DieselBeerRepository {
    pool: DbPool,
}

impl DieselBeerRepository {
    /// Create a repository over the given pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use beers_backend::outbound::persistence::{DbPool, DieselBeerRepository, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/beers")).await?;
    /// let repository = DieselBeerRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BeerRepository for DieselBeerRepository {
    async fn save(&self, beer: NewBeer) -> Result<Beer, BeerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewBeerRow {
            name: beer.name().as_ref(),
        };

        let stored: BeerRow = diesel::insert_into(beers::table)
            .values(&row)
            .returning(BeerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Beer::try_from(stored)
    }

    async fn find_all(&self) -> Result<Vec<Beer>, BeerPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BeerRow> = beers::table
            .select(BeerRow::as_select())
            .order(beers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(Beer::try_from).collect()
    }
}
