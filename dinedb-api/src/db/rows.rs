//! Row to JSON conversion

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, ValueRef};

/// Render a row as a JSON object keyed by column name
///
/// INTEGER, REAL and TEXT map to the matching JSON type; NULL and anything
/// undecodable (BLOB) become `null`. A REAL with no fractional part is
/// written as an integer (`12.0` renders as `12`). Stored values are not coerced, so a
/// boolean-like column comes back as whatever the store holds.
pub fn row_to_object(row: &SqliteRow) -> Value {
    let mut object = Map::with_capacity(row.len());
    for column in row.columns() {
        let index = column.ordinal();
        object.insert(column.name().to_string(), column_value(row, index));
    }
    Value::Object(object)
}

fn column_value(row: &SqliteRow, index: usize) -> Value {
    match row.try_get_raw(index) {
        Ok(raw) if !raw.is_null() => {}
        _ => return Value::Null,
    }

    row.try_get::<i64, _>(index)
        .map(Value::from)
        .or_else(|_| row.try_get::<f64, _>(index).map(real_value))
        .or_else(|_| row.try_get::<String, _>(index).map(Value::String))
        .unwrap_or(Value::Null)
}

// Largest magnitude at which every whole f64 is exactly an i64
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn real_value(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_storage_classes_map_to_json() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let row = sqlx::query("SELECT 7 AS id, 4.5 AS rating, 'Italian' AS cuisine, NULL AS note")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(
            row_to_object(&row),
            json!({"id": 7, "rating": 4.5, "cuisine": "Italian", "note": null})
        );
    }

    #[tokio::test]
    async fn test_whole_real_renders_as_integer() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let row = sqlx::query("SELECT 12.0 AS price, -3.0 AS delta, 0.25 AS tax, 1e300 AS big")
            .fetch_one(&pool)
            .await
            .unwrap();

        let object = row_to_object(&row);
        assert_eq!(object.to_string(), r#"{"price":12,"delta":-3,"tax":0.25,"big":1e300}"#);
    }

    #[tokio::test]
    async fn test_column_order_preserved() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let row = sqlx::query("SELECT 'x' AS zeta, 'y' AS alpha")
            .fetch_one(&pool)
            .await
            .unwrap();

        let object = row_to_object(&row);
        let keys: Vec<&String> = object.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }
}
