//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Persisted beers. `id` is assigned by the `BIGSERIAL` sequence.
    beers (id) {
        id -> Int8,
        name -> Varchar,
    }
}
