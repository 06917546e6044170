//! Backend entry-point: loads settings, prepares and seeds the beer store,
//! then serves the HTTP API.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use beers_backend::inbound::http::health::HealthState;
use beers_backend::startup::{ServerSettings, build_beer_repository, seed_on_startup};
use server::{ServerConfig, create_server};

#[cfg(feature = "metrics")]
fn initialize_metrics<E, F>(make_metrics: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make_metrics() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "failed to initialise Prometheus metrics; continuing without them");
            None
        }
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os()).map_err(|err| {
        error!(error = %err, "failed to load settings");
        std::io::Error::other(err.to_string())
    })?;

    let repository = build_beer_repository(&settings)
        .await
        .inspect_err(|err| error!(error = %err, "beer store unavailable"))?;
    seed_on_startup(repository.clone(), settings.seed_on_startup())
        .await
        .inspect_err(|err| error!(error = %err, "startup seeding failed"))?;

    let config = ServerConfig::new(settings.bind_addr(), settings.cors_origin(), repository);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("beers")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    info!(addr = %settings.bind_addr(), "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
