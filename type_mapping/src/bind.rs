//! Parameter binding

use serde_json::Value;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;
use sqlx::types::Json;

use crate::types::PostgresValue;

/// Bind one JSON parameter to a raw query, typed by [`PostgresValue`] classification.
pub fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: Value,
) -> Query<'q, Postgres, PgArguments> {
    match PostgresValue::from(value) {
        PostgresValue::Text(s) => query.bind(s),
        PostgresValue::Integer(i) => query.bind(i),
        PostgresValue::BigInt(i) => query.bind(i),
        PostgresValue::Float(f) => query.bind(f),
        PostgresValue::Boolean(b) => query.bind(b),
        PostgresValue::Uuid(uuid) => query.bind(uuid),
        PostgresValue::Timestamp(dt) => query.bind(dt),
        PostgresValue::TextArray(items) => query.bind(items),
        PostgresValue::BigIntArray(items) => query.bind(items),
        PostgresValue::FloatArray(items) => query.bind(items),
        PostgresValue::BooleanArray(items) => query.bind(items),
        PostgresValue::Json(other) => query.bind(Json(other)),
        // statements render nulls inline; only direct callers reach this
        PostgresValue::Null => query.bind(Option::<String>::None),
    }
}
