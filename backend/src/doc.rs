//! OpenAPI documentation for the beer service.
//!
//! Served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::beers::BeerResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Good beers API",
        description = "Lists the beers in the store that are worth drinking.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::beers::good_beers,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(BeerResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "beers", description = "Beer listings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
