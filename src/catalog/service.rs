//! Catalog lookups over the cached vehicle list.

use std::sync::Arc;

use tracing::debug;

use crate::cache::VEHICLES_KEY;
use crate::error::AppError;
use crate::AppState;

use super::models::Vehicle;

/// How many names a search returns at most.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Get the vehicle list, from cache when fresh, from upstream otherwise.
pub async fn vehicles(state: &AppState) -> Result<Arc<Vec<Vehicle>>, AppError> {
    if let Some(cached) = state.cache.vehicles.get(VEHICLES_KEY).await {
        debug!("Cache HIT for vehicle catalog");
        return Ok(cached);
    }

    debug!("Cache MISS for vehicle catalog");
    let fetched = Arc::new(state.catalog.fetch_vehicles().await?);
    state
        .cache
        .vehicles
        .insert(VEHICLES_KEY.to_string(), fetched.clone())
        .await;

    Ok(fetched)
}

/// Filter vehicles by category. `all` (or no filter) returns everything.
/// Matching is exact, the way the category pills on the fleet page work.
pub fn filter_by_category(vehicles: &[Vehicle], category: Option<&str>) -> Vec<Vehicle> {
    match category {
        None | Some("all") => vehicles.to_vec(),
        Some(filter) => vehicles
            .iter()
            .filter(|vehicle| vehicle.category.as_deref() == Some(filter))
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring search over vehicle names, capped at
/// `SEARCH_RESULT_LIMIT` matches in catalog order.
pub fn search_names(vehicles: &[Vehicle], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    vehicles
        .iter()
        .filter(|vehicle| vehicle.name.to_lowercase().contains(&needle))
        .take(SEARCH_RESULT_LIMIT)
        .map(|vehicle| vehicle.name.clone())
        .collect()
}

/// Exact-name lookup used when pricing a chosen vehicle.
pub async fn find_by_name(state: &AppState, name: &str) -> Result<Option<Vehicle>, AppError> {
    let vehicles = vehicles(state).await?;
    Ok(vehicles.iter().find(|vehicle| vehicle.name == name).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fleet() -> Vec<Vehicle> {
        let mut everest = Vehicle::new("Everest LX", dec!(4500));
        everest.category = Some("suv".to_string());
        let mut city_go = Vehicle::new("City Go", dec!(1800));
        city_go.category = Some("hatchback".to_string());
        let mut aria = Vehicle::new("Aria Prime", dec!(3200));
        aria.category = Some("sedan".to_string());
        let uncategorized = Vehicle::new("Depot Van", dec!(2100));
        vec![everest, city_go, aria, uncategorized]
    }

    // ==================== filter_by_category tests ====================

    #[test]
    fn test_filter_matches_exact_category() {
        let result = filter_by_category(&fleet(), Some("suv"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Everest LX");
    }

    #[test]
    fn test_filter_all_returns_everything() {
        assert_eq!(filter_by_category(&fleet(), Some("all")).len(), 4);
        assert_eq!(filter_by_category(&fleet(), None).len(), 4);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&fleet(), Some("limousine")).is_empty());
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        // Category pills submit lowercase values; anything else is a miss
        assert!(filter_by_category(&fleet(), Some("SUV")).is_empty());
    }

    #[test]
    fn test_filter_skips_uncategorized_vehicles() {
        let names: Vec<String> = filter_by_category(&fleet(), Some("sedan"))
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["Aria Prime"]);
    }

    // ==================== search_names tests ====================

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let names = search_names(&fleet(), "CITY");
        assert_eq!(names, vec!["City Go"]);
    }

    #[test]
    fn test_search_trims_query() {
        let names = search_names(&fleet(), "  aria ");
        assert_eq!(names, vec!["Aria Prime"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(search_names(&fleet(), "zeppelin").is_empty());
    }

    #[test]
    fn test_search_empty_query_returns_first_matches() {
        // An empty needle matches every name; the cap still applies
        let names = search_names(&fleet(), "");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_search_caps_results() {
        let many: Vec<Vehicle> = (0..9)
            .map(|i| Vehicle::new(format!("Nova {}", i), dec!(1000)))
            .collect();
        let names = search_names(&many, "nova");
        assert_eq!(names.len(), SEARCH_RESULT_LIMIT);
        assert_eq!(names[0], "Nova 0");
    }
}
