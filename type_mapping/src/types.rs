//! Runtime parameter values
//!
//! Statement parameters arrive as JSON values. Before binding, each one is classified into the
//! PostgreSQL type it is sent as.

use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum PostgresValue {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    TextArray(Vec<String>),
    BigIntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    BooleanArray(Vec<bool>),
    Json(Value), // sent as JSONB
    Null,
}

impl From<Value> for PostgresValue {
    /// Strings are tried as RFC3339 timestamps, then as UUIDs, before falling back to text.
    /// Integers use INTEGER when they fit and BIGINT otherwise.
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                    PostgresValue::Timestamp(dt.with_timezone(&chrono::Utc))
                } else if let Ok(uuid) = Uuid::parse_str(&s) {
                    PostgresValue::Uuid(uuid)
                } else {
                    PostgresValue::Text(s)
                }
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => PostgresValue::Integer(small),
                        Err(_) => PostgresValue::BigInt(i),
                    }
                } else if let Some(f) = n.as_f64() {
                    PostgresValue::Float(f)
                } else {
                    PostgresValue::Text(n.to_string())
                }
            }
            Value::Bool(b) => PostgresValue::Boolean(b),
            Value::Null => PostgresValue::Null,
            Value::Array(items) => classify_array(items),
            other => PostgresValue::Json(other),
        }
    }
}

/// Arrays whose elements share one scalar type bind as PostgreSQL arrays so they round-trip
/// through array columns. An empty array is a `TEXT[]`. Anything else is JSONB.
fn classify_array(items: Vec<Value>) -> PostgresValue {
    if items.iter().all(Value::is_string) {
        return PostgresValue::TextArray(
            items
                .into_iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        );
    }

    if items.iter().all(Value::is_boolean) {
        return PostgresValue::BooleanArray(items.iter().filter_map(Value::as_bool).collect());
    }

    if items.iter().all(Value::is_i64) {
        return PostgresValue::BigIntArray(items.iter().filter_map(Value::as_i64).collect());
    }

    if items.iter().all(Value::is_number) {
        return PostgresValue::FloatArray(items.iter().filter_map(Value::as_f64).collect());
    }

    PostgresValue::Json(Value::Array(items))
}
