//! Vehicle catalog mirrored from the DriveNova backend.
//!
//! The backend owns the fleet; this module fetches it over HTTP, caches
//! it, and answers the listing, filter and search queries the site uses.

pub mod client;
pub mod models;
pub mod routes;
pub mod service;

// Re-export commonly used items
pub use client::CatalogClient;
pub use models::Vehicle;
pub use routes::router;
