//! Route handlers and top-level router assembly.

pub mod meta;

use axum::Router;

use crate::{catalog, pricing, AppState};

/// Assemble every route the engine serves.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(pricing::router())
        .merge(catalog::router())
        .merge(meta::router())
}
