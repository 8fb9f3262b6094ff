//! In-process backend
//!
//! Interprets statements directly against rows held in memory. Tables are created on first
//! use from the statement's table definition; an `id` column behaves like a serial key and
//! other missing columns take their configured default, or null.

use async_trait::async_trait;
use regex::RegexBuilder;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::backend::Connection;
use crate::errors::ModelError;
use crate::query_builder::{Condition, FilterOperator, SortOrder, Statement, StatementKind, Table};
use crate::Row;

#[derive(Debug, Default)]
struct MemoryTable {
    rows: Vec<Row>,
    last_id: i64,
    defaults: Row,
}

#[derive(Debug, Default)]
pub struct MemoryConnection {
    tables: RwLock<HashMap<String, MemoryTable>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value an INSERT stores in `column` when the statement leaves it out.
    pub fn with_default(mut self, table: &str, column: &str, value: Value) -> Self {
        self.tables
            .get_mut()
            .entry(table.to_string())
            .or_default()
            .defaults
            .insert(column.to_string(), value);
        self
    }

    /// Snapshot of a table's rows in insertion order.
    pub async fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .read()
            .await
            .get(table)
            .map(|table| table.rows.clone())
            .unwrap_or_default()
    }

    async fn run(&self, statement: &Statement) -> Result<(Vec<Row>, u64), ModelError> {
        trace_log!(
            "[MEMORY] {:?} on {} with {} conditions",
            statement.kind(),
            statement.table().name(),
            statement.conditions().len()
        );

        let definition = statement.table();
        let mut tables = self.tables.write().await;
        let table = tables.entry(definition.name().to_string()).or_default();

        match statement.kind() {
            StatementKind::Select => {
                let mut rows = Vec::new();
                for row in &table.rows {
                    if matches_all(row, statement.conditions())? {
                        rows.push(row.clone());
                    }
                }
                sort_rows(&mut rows, statement.order());
                if let Some(limit) = statement.limit_value() {
                    rows.truncate(limit as usize);
                }
                let count = rows.len() as u64;
                Ok((rows, count))
            }
            StatementKind::Count => {
                let mut total = 0_i64;
                for row in &table.rows {
                    if matches_all(row, statement.conditions())? {
                        total += 1;
                    }
                }
                let mut row = Row::new();
                row.insert(definition.count_column(), Value::from(total));
                Ok((vec![row], 1))
            }
            StatementKind::Insert(values) => {
                check_columns(definition, values)?;
                let row = build_row(definition, table, values);
                table.rows.push(row.clone());
                Ok((returned(statement, vec![row]), 1))
            }
            StatementKind::Update(changes) => {
                check_columns(definition, changes)?;
                let matched = matching(&table.rows, statement.conditions())?;
                let mut updated = Vec::new();
                for (row, _) in table.rows.iter_mut().zip(matched).filter(|(_, hit)| *hit) {
                    for (column, value) in changes {
                        row.insert(column.clone(), value.clone());
                    }
                    updated.push(row.clone());
                }
                let count = updated.len() as u64;
                Ok((returned(statement, updated), count))
            }
            StatementKind::Delete => {
                let mut matched = matching(&table.rows, statement.conditions())?.into_iter();
                let (removed, kept): (Vec<Row>, Vec<Row>) = table
                    .rows
                    .drain(..)
                    .partition(|_| matched.next().unwrap_or(false));
                table.rows = kept;
                let count = removed.len() as u64;
                Ok((returned(statement, removed), count))
            }
        }
    }
}

#[async_trait]
impl Connection for MemoryConnection {
    async fn fetch(&self, statement: &Statement) -> Result<Vec<Row>, ModelError> {
        self.run(statement).await.map(|(rows, _)| rows)
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, ModelError> {
        self.run(statement).await.map(|(_, count)| count)
    }
}

fn returned(statement: &Statement, rows: Vec<Row>) -> Vec<Row> {
    if statement.is_returning() {
        rows
    } else {
        Vec::new()
    }
}

fn check_columns(definition: &Table, values: &Row) -> Result<(), ModelError> {
    match values.keys().find(|column| definition.column(column).is_none()) {
        Some(column) => Err(ModelError::Backend(format!(
            "column \"{}\" of relation \"{}\" does not exist",
            column,
            definition.name()
        ))),
        None => Ok(()),
    }
}

fn build_row(definition: &Table, table: &mut MemoryTable, values: &Row) -> Row {
    let mut row = Row::new();

    for column in definition.columns() {
        let value = match values.get(column) {
            Some(value) => value.clone(),
            None if column == "id" => {
                table.last_id += 1;
                Value::from(table.last_id)
            }
            None => table.defaults.get(column).cloned().unwrap_or(Value::Null),
        };
        row.insert(column.clone(), value);
    }

    // explicit ids move the sequence forward
    if let Some(id) = row.get("id").and_then(Value::as_i64) {
        table.last_id = table.last_id.max(id);
    }

    row
}

/// Predicate result per row, computed before any row is modified.
fn matching(rows: &[Row], conditions: &[Condition]) -> Result<Vec<bool>, ModelError> {
    rows.iter().map(|row| matches_all(row, conditions)).collect()
}

fn matches_all(row: &Row, conditions: &[Condition]) -> Result<bool, ModelError> {
    for condition in conditions {
        if !matches(row, condition)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches(row: &Row, condition: &Condition) -> Result<bool, ModelError> {
    let cell = row.get(&condition.column).unwrap_or(&Value::Null);
    let value = &condition.value;

    let matched = match condition.operator {
        FilterOperator::Equals if value.is_null() => cell.is_null(),
        FilterOperator::NotEquals if value.is_null() => !cell.is_null(),
        FilterOperator::IsNull => cell.is_null(),
        FilterOperator::IsNotNull => !cell.is_null(),
        // SQL comparisons against NULL are never true
        _ if cell.is_null() => false,
        FilterOperator::Equals => values_equal(cell, value),
        FilterOperator::NotEquals => !values_equal(cell, value),
        FilterOperator::Gt => compare(cell, value) == Some(Ordering::Greater),
        FilterOperator::Gte => matches!(
            compare(cell, value),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        FilterOperator::Lt => compare(cell, value) == Some(Ordering::Less),
        FilterOperator::Lte => matches!(
            compare(cell, value),
            Some(Ordering::Less | Ordering::Equal)
        ),
        FilterOperator::Like => like(cell, value, false)?,
        FilterOperator::NotLike => !like(cell, value, false)?,
        FilterOperator::Ilike => like(cell, value, true)?,
        FilterOperator::NotIlike => !like(cell, value, true)?,
        FilterOperator::In => items(value).iter().any(|item| values_equal(cell, item)),
        FilterOperator::NotIn => !items(value).iter().any(|item| values_equal(cell, item)),
        FilterOperator::Between => {
            let bounds = items(value);
            match (bounds.first(), bounds.get(1)) {
                (Some(low), Some(high)) => {
                    matches!(
                        compare(cell, low),
                        Some(Ordering::Greater | Ordering::Equal)
                    ) && matches!(
                        compare(cell, high),
                        Some(Ordering::Less | Ordering::Equal)
                    )
                }
                _ => false,
            }
        }
    };

    Ok(matched)
}

fn items(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) if left.is_number() && right.is_number() => l == r,
        _ => left == right,
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.as_f64()?.partial_cmp(&r.as_f64()?),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

/// LIKE pattern match: `%` is any run, `_` any single character, `\` escapes.
fn like(cell: &Value, pattern: &Value, case_insensitive: bool) -> Result<bool, ModelError> {
    let (Some(text), Some(pattern)) = (cell.as_str(), pattern.as_str()) else {
        return Ok(false);
    };

    let mut expression = String::from("^");
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => expression.push_str(".*"),
            '_' => expression.push('.'),
            '\\' => {
                if let Some(escaped) = chars.next() {
                    expression.push_str(&regex::escape(&escaped.to_string()));
                }
            }
            other => expression.push_str(&regex::escape(&other.to_string())),
        }
    }
    expression.push('$');

    let regex = RegexBuilder::new(&expression)
        .case_insensitive(case_insensitive)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| ModelError::Backend(format!("invalid LIKE pattern: {}", e)))?;

    Ok(regex.is_match(text))
}

/// NULLS LAST ascending, NULLS FIRST descending, as PostgreSQL does.
fn sort_rows(rows: &mut [Row], order: &[(String, SortOrder)]) {
    if order.is_empty() {
        return;
    }

    rows.sort_by(|a, b| {
        for (column, direction) in order {
            let left = a.get(column).unwrap_or(&Value::Null);
            let right = b.get(column).unwrap_or(&Value::Null);
            let ordering = match (left.is_null(), right.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => compare(left, right).unwrap_or(Ordering::Equal),
            };
            let ordering = match direction {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}
