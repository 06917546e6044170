//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values.

use diesel::prelude::*;

use crate::domain::ports::BeerPersistenceError;
use crate::domain::{Beer, BeerId, BeerName};

use super::schema::beers;

/// Row struct for reading from the beers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = beers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BeerRow {
    pub id: i64,
    pub name: String,
}

/// Insertable struct for new beer rows; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = beers)]
pub(crate) struct NewBeerRow<'a> {
    pub name: &'a str,
}

impl TryFrom<BeerRow> for Beer {
    type Error = BeerPersistenceError;

    fn try_from(row: BeerRow) -> Result<Self, Self::Error> {
        let BeerRow { id, name } = row;
        let name = BeerName::new(name).map_err(|err| {
            BeerPersistenceError::query(format!("stored beer {id} is invalid: {err}"))
        })?;
        Ok(Self::new(BeerId::new(id), name))
    }
}
