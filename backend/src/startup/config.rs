//! Server settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:4200";

/// Settings for the beer service, read from `BEERS_*` environment variables,
/// configuration files and the command line.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BEERS")]
pub struct ServerSettings {
    /// Address to bind the listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the listener to.
    pub port: Option<u16>,
    /// PostgreSQL URL. Without it the service keeps beers in memory.
    pub database_url: Option<String>,
    /// Insert the seed beers when the service starts.
    pub seed_on_startup: Option<bool>,
    /// Browser origin allowed to call the API.
    pub cors_origin: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    /// Socket address built from `host` and `port`, defaulting to
    /// `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Whether startup seeding runs; on unless explicitly disabled.
    #[must_use]
    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(true)
    }

    /// Configured CORS origin, falling back to the local web client.
    #[must_use]
    pub fn cors_origin(&self) -> &str {
        self.cors_origin.as_deref().unwrap_or(DEFAULT_CORS_ORIGIN)
    }

    /// Database URL with surrounding whitespace removed; blank counts as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "BEERS_HOST",
        "BEERS_PORT",
        "BEERS_DATABASE_URL",
        "BEERS_SEED_ON_STARTUP",
        "BEERS_CORS_ORIGIN",
        "BEERS_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("beers-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(settings.cors_origin(), "http://localhost:4200");
        assert!(settings.seed_on_startup());
        assert!(settings.database_url().is_none());
        assert!(settings.db_max_connections.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BEERS_HOST", Some("127.0.0.1".to_owned())),
            ("BEERS_PORT", Some("9090".to_owned())),
            (
                "BEERS_DATABASE_URL",
                Some("postgres://beers@localhost/beers".to_owned()),
            ),
            ("BEERS_SEED_ON_STARTUP", Some("false".to_owned())),
            ("BEERS_CORS_ORIGIN", Some("https://beers.example".to_owned())),
            ("BEERS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        assert_eq!(
            settings.database_url(),
            Some("postgres://beers@localhost/beers")
        );
        assert!(!settings.seed_on_startup());
        assert_eq!(settings.cors_origin(), "https://beers.example");
        assert_eq!(settings.db_max_connections, Some(4));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_database_url_counts_as_unset(#[case] raw: &str) {
        let _guard = lock_env([("BEERS_DATABASE_URL", Some(raw.to_owned()))]);

        let settings = load_from_empty_args();

        assert!(settings.database_url().is_none());
    }
}
