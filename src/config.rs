//! Environment-driven configuration.

use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use tracing::{info, warn};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the DriveNova backend serving `/api/cars`.
    pub catalog_base_url: String,
    /// How long a fetched catalog stays fresh.
    pub catalog_cache_ttl: Duration,
    /// Per-request timeout against the upstream catalog.
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: try_load("DRIVENOVA_BIND_ADDR", "0.0.0.0:8080"),
            catalog_base_url: try_load(
                "DRIVENOVA_CATALOG_URL",
                "https://drivenova-backend.onrender.com",
            ),
            catalog_cache_ttl: Duration::from_secs(try_load("DRIVENOVA_CATALOG_TTL_SECS", "300")),
            upstream_timeout: Duration::from_secs(try_load(
                "DRIVENOVA_UPSTREAM_TIMEOUT_SECS",
                "10",
            )),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}; falling back to {default}");
        default
            .parse()
            .map_err(|_| ())
            .expect("default configuration must parse")
    })
}
