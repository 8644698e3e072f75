//! In-memory caching using moka
//!
//! The vehicle catalog lives in the DriveNova backend and changes
//! rarely, so the full list is cached here and refreshed by a
//! background warmer. Quotes and searches read from this cache.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::catalog::{CatalogClient, Vehicle};

/// Cache key of the full vehicle list.
pub const VEHICLES_KEY: &str = "vehicles:all";

/// Application cache holding the mirrored vehicle catalog
#[derive(Clone)]
pub struct AppCache {
    /// Vehicle catalog (VEHICLES_KEY -> full list)
    pub vehicles: Cache<String, Arc<Vec<Vehicle>>>,
}

impl AppCache {
    /// Create a new cache instance with the configured TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            // Single entry: the whole catalog lives under one key
            vehicles: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
        }
    }

    /// Get cache statistics for monitoring
    pub async fn stats(&self) -> CacheStats {
        let vehicles = self.vehicles.get(VEHICLES_KEY).await;
        CacheStats {
            catalog_cached: vehicles.is_some(),
            vehicle_count: vehicles.map(|list| list.len() as u64).unwrap_or(0),
        }
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub catalog_cached: bool,
    pub vehicle_count: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes it on the given interval.
pub async fn start_cache_warmer(cache: AppCache, catalog: CatalogClient, refresh: Duration) {
    // Initial warm-up
    warm_cache(&cache, &catalog).await;

    // Periodic refresh
    let mut interval = interval(refresh);
    loop {
        interval.tick().await;
        warm_cache(&cache, &catalog).await;
    }
}

/// Warm the cache with the current upstream catalog
async fn warm_cache(cache: &AppCache, catalog: &CatalogClient) {
    info!("Starting catalog warm-up...");

    match catalog.fetch_vehicles().await {
        Ok(vehicles) => {
            info!("Catalog warm-up complete: {} vehicles", vehicles.len());
            cache
                .vehicles
                .insert(VEHICLES_KEY.to_string(), Arc::new(vehicles))
                .await;
        }
        Err(e) => warn!("Failed to warm vehicle cache: {}", e),
    }
}
