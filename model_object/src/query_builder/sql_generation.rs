//! SQL generation
//!
//! Renders statements to PostgreSQL text. Identifiers are always quoted and qualified with the
//! table name in predicates and order terms; values are never inlined, except `NULL`.

use serde_json::Value;

use crate::query_builder::filter::{Condition, FilterOperator};
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::statement::{Query, Statement, StatementKind};
use crate::Row;

pub struct SqlGenerator;

impl SqlGenerator {
    pub fn render(statement: &Statement) -> Query {
        let table = statement.table.name();
        let mut values = Vec::new();
        let mut param_counter = 1;

        let mut text = match &statement.kind {
            StatementKind::Select => {
                format!("SELECT {}.* FROM {}", quote(table), quote(table))
            }
            StatementKind::Count => format!(
                "SELECT COUNT({}.*) AS {} FROM {}",
                quote(table),
                quote(&statement.table.count_column()),
                quote(table)
            ),
            StatementKind::Insert(row) => {
                Self::build_insert(table, row, &mut values, &mut param_counter)
            }
            StatementKind::Update(changes) => {
                // SET parameters are numbered before the WHERE parameters
                let set_clause = Self::build_set_clause(changes, &mut values, &mut param_counter);
                format!("UPDATE {} SET {}", quote(table), set_clause)
            }
            StatementKind::Delete => format!("DELETE FROM {}", quote(table)),
        };

        if !matches!(statement.kind, StatementKind::Insert(_)) {
            let where_clause = Self::build_where_clause(
                table,
                &statement.conditions,
                &mut values,
                &mut param_counter,
            );
            push_clause(&mut text, &where_clause);
        }

        if statement.kind == StatementKind::Select {
            push_clause(&mut text, &Self::build_order_clause(table, &statement.order_by));
            push_clause(&mut text, &Self::build_limit_clause(statement.limit));
        }

        if statement.returning {
            push_clause(&mut text, "RETURNING *");
        }

        Query { text, values }
    }

    fn build_insert(
        table: &str,
        row: &Row,
        values: &mut Vec<Value>,
        param_counter: &mut usize,
    ) -> String {
        if row.is_empty() {
            return format!("INSERT INTO {} DEFAULT VALUES", quote(table));
        }

        let columns = row.keys().map(|c| quote(c)).collect::<Vec<_>>().join(", ");
        let placeholders = row
            .values()
            .map(|value| push_param(value.clone(), values, param_counter))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            quote(table),
            columns,
            placeholders
        )
    }

    fn build_set_clause(changes: &Row, values: &mut Vec<Value>, param_counter: &mut usize) -> String {
        changes
            .iter()
            .map(|(column, value)| {
                let param = push_param(value.clone(), values, param_counter);
                format!("{} = {}", quote(column), param)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build WHERE clause from conditions
    pub fn build_where_clause(
        table: &str,
        conditions: &[Condition],
        values: &mut Vec<Value>,
        param_counter: &mut usize,
    ) -> String {
        if conditions.is_empty() {
            return String::new();
        }

        let conditions_sql = conditions
            .iter()
            .map(|condition| {
                format!(
                    "({})",
                    Self::build_condition_sql(table, condition, values, param_counter)
                )
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        format!("WHERE {}", conditions_sql)
    }

    fn build_condition_sql(
        table: &str,
        condition: &Condition,
        values: &mut Vec<Value>,
        param_counter: &mut usize,
    ) -> String {
        let field = qualified(table, &condition.column);
        let value = &condition.value;

        match condition.operator {
            FilterOperator::Equals if value.is_null() => format!("{} IS NULL", field),
            FilterOperator::NotEquals if value.is_null() => format!("{} IS NOT NULL", field),
            FilterOperator::IsNull => format!("{} IS NULL", field),
            FilterOperator::IsNotNull => format!("{} IS NOT NULL", field),
            FilterOperator::In | FilterOperator::NotIn => {
                let negated = condition.operator == FilterOperator::NotIn;
                let items = value.as_array().cloned().unwrap_or_default();
                if items.is_empty() {
                    // Empty IN matches nothing, empty NOT IN matches everything
                    return if negated { "1=1" } else { "1=0" }.to_string();
                }

                let placeholders = items
                    .into_iter()
                    .map(|item| push_param(item, values, param_counter))
                    .collect::<Vec<_>>()
                    .join(", ");
                let keyword = if negated { "NOT IN" } else { "IN" };
                format!("{} {} ({})", field, keyword, placeholders)
            }
            FilterOperator::Between => {
                let bounds = value.as_array().cloned().unwrap_or_default();
                let mut bounds = bounds.into_iter();
                let low = push_param(bounds.next().unwrap_or(Value::Null), values, param_counter);
                let high = push_param(bounds.next().unwrap_or(Value::Null), values, param_counter);
                format!("{} BETWEEN {} AND {}", field, low, high)
            }
            operator => {
                let param = push_param(value.clone(), values, param_counter);
                format!("{} {} {}", field, binary_sql(operator), param)
            }
        }
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(table: &str, order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(column, order)| format!("{} {}", qualified(table, column), order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT clause
    pub fn build_limit_clause(limit: Option<u64>) -> String {
        limit
            .map(|limit| format!("LIMIT {}", limit))
            .unwrap_or_default()
    }
}

fn binary_sql(operator: FilterOperator) -> &'static str {
    match operator {
        FilterOperator::Equals => "=",
        FilterOperator::NotEquals => "<>",
        FilterOperator::Gt => ">",
        FilterOperator::Gte => ">=",
        FilterOperator::Lt => "<",
        FilterOperator::Lte => "<=",
        FilterOperator::Like => "LIKE",
        FilterOperator::NotLike => "NOT LIKE",
        FilterOperator::Ilike => "ILIKE",
        FilterOperator::NotIlike => "NOT ILIKE",
        // handled before dispatch
        FilterOperator::In
        | FilterOperator::NotIn
        | FilterOperator::IsNull
        | FilterOperator::IsNotNull
        | FilterOperator::Between => "=",
    }
}

/// Nulls are rendered as a literal `NULL` so PostgreSQL types them from the column; a bound
/// null parameter would carry a concrete type and fail on non-text columns.
fn push_param(value: Value, values: &mut Vec<Value>, param_counter: &mut usize) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }

    values.push(value);
    let param = format!("${}", param_counter);
    *param_counter += 1;
    param
}

fn push_clause(text: &mut String, clause: &str) {
    if !clause.is_empty() {
        text.push(' ');
        text.push_str(clause);
    }
}

/// Double-quote an identifier, escaping embedded quotes.
pub fn quote(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn qualified(table: &str, column: &str) -> String {
    format!("{}.{}", quote(table), quote(column))
}
