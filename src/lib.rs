//! DriveNova pricing engine.
//!
//! Rust/Axum service behind the DriveNova car rental site. It mirrors
//! the vehicle catalog from the backend, answers the fleet listing and
//! search queries, computes rental quotes (billable days times daily
//! rate, plus per-day add-on services) and re-prices submitted booking
//! payloads to verify their totals. The site and the booking backend
//! consume it over HTTP/JSON.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use cache::AppCache;
use catalog::CatalogClient;
use config::AppConfig;

pub use error::{AppError, Result};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub cache: AppCache,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let catalog = CatalogClient::new(&config.catalog_base_url, config.upstream_timeout)?;
        let cache = AppCache::new(config.catalog_cache_ttl);
        Ok(Self {
            catalog,
            cache,
            config: Arc::new(config),
        })
    }
}
