//! Catalog route handlers

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::AppState;

use super::models::Vehicle;
use super::service;

/// Query parameters for the vehicle listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Query parameters for name search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Router for catalog endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cars", get(list))
        .route("/api/cars/search", get(search))
}

/// Vehicle listing, optionally narrowed to one category
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Vehicle>>> {
    let vehicles = service::vehicles(&state).await?;
    Ok(Json(service::filter_by_category(
        &vehicles,
        query.category.as_deref(),
    )))
}

/// Search-as-you-type lookup over vehicle names
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<String>>> {
    let vehicles = service::vehicles(&state).await?;
    Ok(Json(service::search_names(&vehicles, &query.q)))
}
