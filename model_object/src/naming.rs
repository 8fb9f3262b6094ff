//! Field name translation
//!
//! Application code names fields in camelCase, tables name columns in snake_case.
//! Every key crossing the storage boundary goes through one of these functions.

use convert_case::{Case, Casing};

use crate::{Fields, Row};

/// `createdAt` -> `created_at`
pub fn to_storage_name(field: &str) -> String {
    field.to_case(Case::Snake)
}

/// `created_at` -> `createdAt`
pub fn to_external_name(column: &str) -> String {
    column.to_case(Case::Camel)
}

/// Rename every key to storage convention. Values are untouched and unknown keys are kept.
pub fn to_storage(fields: &Fields) -> Row {
    fields
        .iter()
        .map(|(key, value)| (to_storage_name(key), value.clone()))
        .collect()
}

/// Rename every key of a raw row to external convention.
pub fn to_external(row: &Row) -> Fields {
    row.iter()
        .map(|(key, value)| (to_external_name(key), value.clone()))
        .collect()
}
