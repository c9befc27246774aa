//! Dish endpoints

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
use crate::db::dishes;
use crate::AppState;

/// Query parameters for GET /dishes/filter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub is_veg: Option<String>,
}

/// GET /dishes
pub async fn list_dishes(State(state): State<AppState>) -> ApiResult {
    let rows = dishes::fetch_all(&state.db).await?;
    envelope("dishes", rows, || "No dishes found.".to_string())
}

/// GET /dishes/details/:id
pub async fn get_dish_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult {
    let Path(id) = path?;
    let rows = dishes::fetch_by_id(&state.db, &id).await?;
    envelope("dishes", rows, || format!("No dishes found for this id: {}", id))
}

/// GET /dishes/filter?isVeg=
pub async fn filter_dishes(
    State(state): State<AppState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query?;
    let rows = dishes::fetch_by_veg(&state.db, query.is_veg.as_deref()).await?;
    envelope("dishes", rows, || "No dishes found as your requirement.".to_string())
}

/// GET /dishes/sort-by-price
pub async fn sort_dishes_by_price(State(state): State<AppState>) -> ApiResult {
    let rows = dishes::fetch_sorted_by_price(&state.db).await?;
    // Message text is part of the public contract, typo included
    envelope("dishes", rows, || "No Dishe found.".to_string())
}

/// Build dish routes
pub fn dish_routes() -> Router<AppState> {
    Router::new()
        .route("/dishes", get(list_dishes))
        .route("/dishes/details/:id", get(get_dish_by_id))
        .route("/dishes/filter", get(filter_dishes))
        .route("/dishes/sort-by-price", get(sort_dishes_by_price))
}
