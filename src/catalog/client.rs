//! HTTP client for the upstream vehicle catalog.

use std::time::Duration;

use tracing::debug;

use crate::error::AppError;

use super::models::Vehicle;

/// Client for the catalog endpoints of the DriveNova backend.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client against the given base URL. A trailing slash on
    /// the URL is tolerated.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full vehicle list from `GET /api/cars`.
    pub async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let url = format!("{}/api/cars", self.base_url);
        debug!("Fetching vehicle catalog from {}", url);

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let vehicles: Vec<Vehicle> = response.json().await?;

        debug!("Fetched {} vehicles from catalog", vehicles.len());
        Ok(vehicles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_normalizes_trailing_slash() {
        let client = CatalogClient::new(
            "https://drivenova-backend.onrender.com/",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://drivenova-backend.onrender.com");
    }
}
