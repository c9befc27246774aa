//! Restaurant queries

use dinedb_common::Result;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;

use super::row_to_object;

const SELECT_ALL: &str = "SELECT * FROM restaurants";
const SELECT_BY_ID: &str = "SELECT * FROM restaurants WHERE id = ?";
const SELECT_BY_CUISINE: &str = "SELECT * FROM restaurants WHERE cuisine = ?";
const SELECT_BY_FILTER: &str =
    "SELECT * FROM restaurants WHERE isVeg = ? AND hasOutdoorSeating = ? AND isLuxury = ?";
const SELECT_BY_RATING: &str = "SELECT * FROM restaurants ORDER BY rating DESC";

/// Values for the three-way restaurant filter
///
/// Each value is bound as given; a missing one binds NULL and so matches
/// no row.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestaurantFilter<'a> {
    pub is_veg: Option<&'a str>,
    pub has_outdoor_seating: Option<&'a str>,
    pub is_luxury: Option<&'a str>,
}

/// All restaurants, in store order
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Value>> {
    debug!("Fetching all restaurants");
    let rows = sqlx::query(SELECT_ALL).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// Restaurants whose id equals `id`
pub async fn fetch_by_id(pool: &SqlitePool, id: &str) -> Result<Vec<Value>> {
    debug!(id, "Fetching restaurant by id");
    let rows = sqlx::query(SELECT_BY_ID).bind(id).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// Restaurants whose cuisine equals `cuisine`
pub async fn fetch_by_cuisine(pool: &SqlitePool, cuisine: &str) -> Result<Vec<Value>> {
    debug!(cuisine, "Fetching restaurants by cuisine");
    let rows = sqlx::query(SELECT_BY_CUISINE)
        .bind(cuisine)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// Restaurants matching all three filter values
pub async fn fetch_by_filter(
    pool: &SqlitePool,
    filter: RestaurantFilter<'_>,
) -> Result<Vec<Value>> {
    debug!(?filter, "Filtering restaurants");
    let rows = sqlx::query(SELECT_BY_FILTER)
        .bind(filter.is_veg)
        .bind(filter.has_outdoor_seating)
        .bind(filter.is_luxury)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// All restaurants, highest rating first
pub async fn fetch_sorted_by_rating(pool: &SqlitePool) -> Result<Vec<Value>> {
    debug!("Fetching restaurants sorted by rating");
    let rows = sqlx::query(SELECT_BY_RATING).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}
