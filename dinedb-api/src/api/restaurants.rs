//! Restaurant endpoints
//!
//! Success bodies use `restaurant` for the list and by-id routes and
//! `restaurants` for the rest; clients depend on both keys.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Router,
};
use serde::Deserialize;

use super::{envelope, ApiResult};
use crate::db::restaurants::{self, RestaurantFilter};
use crate::AppState;

/// Query parameters for GET /restaurants/filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub is_veg: Option<String>,
    pub has_outdoor_seating: Option<String>,
    pub is_luxury: Option<String>,
}

/// GET /restaurants
pub async fn list_restaurants(State(state): State<AppState>) -> ApiResult {
    let rows = restaurants::fetch_all(&state.db).await?;
    envelope("restaurant", rows, || "No restaurants found.".to_string())
}

/// GET /restaurants/details/:id
pub async fn get_restaurant_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult {
    let Path(id) = path?;
    let rows = restaurants::fetch_by_id(&state.db, &id).await?;
    envelope("restaurant", rows, || {
        format!("No restaurants found for this id: {}", id)
    })
}

/// GET /restaurants/cuisine/:cuisine
pub async fn get_restaurants_by_cuisine(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult {
    let Path(cuisine) = path?;
    let rows = restaurants::fetch_by_cuisine(&state.db, &cuisine).await?;
    envelope("restaurants", rows, || {
        format!("No restaurants found for this cuisine: {}", cuisine)
    })
}

/// GET /restaurants/filter?isVeg=&hasOutdoorSeating=&isLuxury=
///
/// A row matches only if all three columns equal the supplied values.
pub async fn filter_restaurants(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query?;
    let filter = RestaurantFilter {
        is_veg: query.is_veg.as_deref(),
        has_outdoor_seating: query.has_outdoor_seating.as_deref(),
        is_luxury: query.is_luxury.as_deref(),
    };
    let rows = restaurants::fetch_by_filter(&state.db, filter).await?;
    envelope("restaurants", rows, || {
        "No restaurants found as your requirement.".to_string()
    })
}

/// GET /restaurants/sort-by-rating
pub async fn sort_restaurants_by_rating(State(state): State<AppState>) -> ApiResult {
    let rows = restaurants::fetch_sorted_by_rating(&state.db).await?;
    envelope("restaurants", rows, || "No restaurants found.".to_string())
}

/// Build restaurant routes
pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/details/:id", get(get_restaurant_by_id))
        .route("/restaurants/cuisine/:cuisine", get(get_restaurants_by_cuisine))
        .route("/restaurants/filter", get(filter_restaurants))
        .route("/restaurants/sort-by-rating", get(sort_restaurants_by_rating))
}
