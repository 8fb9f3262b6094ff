//! Row decoding
//!
//! Rows come back from PostgreSQL as JSON maps keyed by column name, in column order.
//! Timestamps are rendered as RFC3339 strings and UUIDs in hyphenated form, so they bind back
//! to the same types when a decoded record is written again. NUMERIC values become JSON
//! numbers and one-dimensional arrays become JSON arrays.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Decode every column of `row`. SQL NULL is JSON null for any type; a non-null value whose
/// type has no JSON mapping is a decode error, never a silent null.
pub fn row_to_json(row: &PgRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut record = Map::new();

    for (index, column) in row.columns().iter().enumerate() {
        let value = decode_column(row, index, column.name(), column.type_info().name())?;
        record.insert(column.name().to_string(), value);
    }

    Ok(record)
}

fn decode_column(
    row: &PgRow,
    index: usize,
    column: &str,
    type_name: &str,
) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "INT2" => row.try_get::<Option<i16>, _>(index)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(index)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(Value::from),
        "FLOAT4" => row.try_get::<Option<f32>, _>(index)?.map(Value::from),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(Value::from),
        "NUMERIC" => row.try_get::<Option<Decimal>, _>(index)?.map(decimal_to_json),
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(Value::from),
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(index)?.map(Value::from)
        }
        "UUID" => row
            .try_get::<Option<uuid::Uuid>, _>(index)?
            .map(|uuid| Value::from(uuid.to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
            .map(|dt| Value::from(dt.to_rfc3339())),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|dt| Value::from(dt.and_utc().to_rfc3339())),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|date| Value::from(date.to_string())),
        "JSON" | "JSONB" => row.try_get::<Option<Value>, _>(index)?,

        "TEXT[]" | "VARCHAR[]" | "CHAR[]" | "NAME[]" => {
            array(row.try_get::<Option<Vec<Option<String>>>, _>(index)?, Value::from)
        }
        "INT2[]" => array(row.try_get::<Option<Vec<Option<i16>>>, _>(index)?, Value::from),
        "INT4[]" => array(row.try_get::<Option<Vec<Option<i32>>>, _>(index)?, Value::from),
        "INT8[]" => array(row.try_get::<Option<Vec<Option<i64>>>, _>(index)?, Value::from),
        "FLOAT4[]" => array(row.try_get::<Option<Vec<Option<f32>>>, _>(index)?, Value::from),
        "FLOAT8[]" => array(row.try_get::<Option<Vec<Option<f64>>>, _>(index)?, Value::from),
        "NUMERIC[]" => array(
            row.try_get::<Option<Vec<Option<Decimal>>>, _>(index)?,
            decimal_to_json,
        ),
        "BOOL[]" => array(row.try_get::<Option<Vec<Option<bool>>>, _>(index)?, Value::from),
        "UUID[]" => array(
            row.try_get::<Option<Vec<Option<uuid::Uuid>>>, _>(index)?,
            |uuid| Value::from(uuid.to_string()),
        ),

        other => {
            return Err(sqlx::Error::Decode(
                format!("column \"{}\" has unsupported type {}", column, other).into(),
            ))
        }
    };

    Ok(value.unwrap_or(Value::Null))
}

fn array<T>(values: Option<Vec<Option<T>>>, convert: impl Fn(T) -> Value) -> Option<Value> {
    values.map(|items| {
        Value::Array(
            items
                .into_iter()
                .map(|item| item.map(&convert).unwrap_or(Value::Null))
                .collect(),
        )
    })
}

/// Whole decimals become JSON integers when they fit, others the nearest `f64`.
pub fn decimal_to_json(decimal: Decimal) -> Value {
    let normalized = decimal.normalize();
    if normalized.scale() == 0 {
        if let Some(integer) = normalized.to_i64() {
            return Value::from(integer);
        }
    }

    normalized
        .to_string()
        .parse::<f64>()
        .map(Value::from)
        .unwrap_or(Value::Null)
}
