//! Dish queries

use dinedb_common::Result;
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::debug;

use super::row_to_object;

const SELECT_ALL: &str = "SELECT * FROM dishes";
const SELECT_BY_ID: &str = "SELECT * FROM dishes WHERE id = ?";
const SELECT_BY_VEG: &str = "SELECT * FROM dishes WHERE isVeg = ?";
const SELECT_BY_PRICE: &str = "SELECT * FROM dishes ORDER BY price ASC";

/// All dishes, in store order
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Value>> {
    debug!("Fetching all dishes");
    let rows = sqlx::query(SELECT_ALL).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// Dishes whose id equals `id`
pub async fn fetch_by_id(pool: &SqlitePool, id: &str) -> Result<Vec<Value>> {
    debug!(id, "Fetching dish by id");
    let rows = sqlx::query(SELECT_BY_ID).bind(id).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// Dishes whose isVeg equals `is_veg`; `None` binds NULL and matches nothing
pub async fn fetch_by_veg(pool: &SqlitePool, is_veg: Option<&str>) -> Result<Vec<Value>> {
    debug!(?is_veg, "Filtering dishes");
    let rows = sqlx::query(SELECT_BY_VEG)
        .bind(is_veg)
        .fetch_all(pool)
        .await?;
    Ok(rows.iter().map(row_to_object).collect())
}

/// All dishes, cheapest first
pub async fn fetch_sorted_by_price(pool: &SqlitePool) -> Result<Vec<Value>> {
    debug!("Fetching dishes sorted by price");
    let rows = sqlx::query(SELECT_BY_PRICE).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_object).collect())
}
