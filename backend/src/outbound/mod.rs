//! Outbound adapters implementing domain ports.
//!
//! - `persistence`: PostgreSQL store via Diesel.
//! - `memory`: process-local store used without a database and in tests.

pub mod memory;
pub mod persistence;
