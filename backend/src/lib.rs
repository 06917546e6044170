//! Good beers backend library.
//!
//! Hexagonal layout: `domain` holds the beer model, its use-cases and ports;
//! `inbound` adapts HTTP requests onto those ports; `outbound` implements the
//! store port over PostgreSQL or process memory; `startup` wires them together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod startup;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
