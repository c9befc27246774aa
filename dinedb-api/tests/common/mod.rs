//! Shared fixtures for dinedb-api integration tests
//!
//! Each test gets its own in-memory SQLite database on a single-connection
//! pool, so the tables live exactly as long as the pool.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use dinedb_api::{build_router, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

/// Pool over a fresh in-memory database with no tables
pub async fn empty_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Should open in-memory database")
}

/// Pool with empty `restaurants` and `dishes` tables
pub async fn schema_pool() -> SqlitePool {
    let pool = empty_pool().await;

    sqlx::query(
        "CREATE TABLE restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT,
            cuisine TEXT,
            rating REAL,
            isVeg TEXT,
            hasOutdoorSeating TEXT,
            isLuxury TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("Should create restaurants table");

    sqlx::query(
        "CREATE TABLE dishes (
            id INTEGER PRIMARY KEY,
            name TEXT,
            price REAL,
            rating REAL,
            isVeg TEXT
        )",
    )
    .execute(&pool)
    .await
    .expect("Should create dishes table");

    pool
}

pub async fn insert_restaurant(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    cuisine: &str,
    rating: f64,
    flags: (bool, bool, bool),
) {
    sqlx::query(
        "INSERT INTO restaurants (id, name, cuisine, rating, isVeg, hasOutdoorSeating, isLuxury)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(cuisine)
    .bind(rating)
    .bind(flags.0.to_string())
    .bind(flags.1.to_string())
    .bind(flags.2.to_string())
    .execute(pool)
    .await
    .expect("Should insert restaurant");
}

pub async fn insert_dish(pool: &SqlitePool, id: i64, name: &str, price: f64, is_veg: bool) {
    sqlx::query("INSERT INTO dishes (id, name, price, rating, isVeg) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(4.0)
        .bind(is_veg.to_string())
        .execute(pool)
        .await
        .expect("Should insert dish");
}

/// Four restaurants and three dishes
///
/// | id | restaurant   | cuisine | rating | isVeg | outdoor | luxury |
/// |----|--------------|---------|--------|-------|---------|--------|
/// | 1  | Spice Kitchen| Indian  | 4.5    | true  | true    | false  |
/// | 2  | Olive Bistro | Italian | 4.1    | false | true    | true   |
/// | 3  | Green Leaf   | Italian | 4.8    | true  | false   | false  |
/// | 4  | Taco Town    | Mexican | 3.9    | false | false   | false  |
///
/// Dishes priced 12, 5, 8 (ids 1, 2, 3); ids 1 and 3 are veg.
pub async fn seeded_pool() -> SqlitePool {
    let pool = schema_pool().await;

    insert_restaurant(&pool, 1, "Spice Kitchen", "Indian", 4.5, (true, true, false)).await;
    insert_restaurant(&pool, 2, "Olive Bistro", "Italian", 4.1, (false, true, true)).await;
    insert_restaurant(&pool, 3, "Green Leaf", "Italian", 4.8, (true, false, false)).await;
    insert_restaurant(&pool, 4, "Taco Town", "Mexican", 3.9, (false, false, false)).await;

    insert_dish(&pool, 1, "Paneer Tikka", 12.0, true).await;
    insert_dish(&pool, 2, "Chicken Wings", 5.0, false).await;
    insert_dish(&pool, 3, "Veg Biryani", 8.0, true).await;

    pool
}

pub fn setup_app(db: SqlitePool) -> Router {
    build_router(AppState::new(db))
}

pub fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Send a GET and return status plus parsed body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response: Response<Body> = app.oneshot(test_request(uri)).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

/// Values of `field` across the rows held under `key`
pub fn column<'a>(body: &'a Value, key: &str, field: &str) -> Vec<&'a Value> {
    body[key]
        .as_array()
        .expect("Envelope should hold an array")
        .iter()
        .map(|row| &row[field])
        .collect()
}
