//! Statements
//!
//! A statement is a table-scoped SELECT, COUNT, INSERT, UPDATE or DELETE plus the predicates,
//! order terms and limit compiled onto it.

use serde_json::Value;
use std::sync::Arc;

use crate::query_builder::filter::Condition;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::table::Table;
use crate::Row;

/// Parameterized statement text and its positional values.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub text: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    /// `SELECT "table".*`
    Select,
    /// `SELECT COUNT("table".*) AS "table_count"`
    Count,
    /// Column values in storage convention.
    Insert(Row),
    /// Changed column values in storage convention.
    Update(Row),
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub(crate) table: Arc<Table>,
    pub(crate) kind: StatementKind,
    pub(crate) conditions: Vec<Condition>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<u64>,
    pub(crate) returning: bool,
}

impl Statement {
    fn new(table: Arc<Table>, kind: StatementKind) -> Self {
        Self {
            table,
            kind,
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            returning: false,
        }
    }

    pub fn select(table: Arc<Table>) -> Self {
        Self::new(table, StatementKind::Select)
    }

    pub fn count(table: Arc<Table>) -> Self {
        Self::new(table, StatementKind::Count)
    }

    pub fn insert(table: Arc<Table>, values: Row) -> Self {
        Self::new(table, StatementKind::Insert(values))
    }

    pub fn update(table: Arc<Table>, changes: Row) -> Self {
        Self::new(table, StatementKind::Update(changes))
    }

    pub fn delete(table: Arc<Table>) -> Self {
        Self::new(table, StatementKind::Delete)
    }

    /// Add a predicate; predicates are combined with AND.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.order_by.push((column.into(), order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Ask for the affected rows back (`RETURNING *`).
    pub fn returning(mut self) -> Self {
        self.returning = true;
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn kind(&self) -> &StatementKind {
        &self.kind
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn order(&self) -> &[(String, SortOrder)] {
        &self.order_by
    }

    pub fn limit_value(&self) -> Option<u64> {
        self.limit
    }

    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Render to PostgreSQL text with `$n` placeholders.
    pub fn to_query(&self) -> Query {
        SqlGenerator::render(self)
    }
}
