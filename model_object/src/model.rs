//! Configured entity types
//!
//! A [`Model`] is bound once from a [`Schema`] and then shared freely: clones are handles to the
//! same read-only configuration. Every operation is one round trip through the model's
//! [`Connection`], with hooks awaited around the mutations.

use futures::future::try_join_all;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::backend::Connection;
use crate::errors::ModelError;
use crate::hooks::Hooks;
use crate::instance::Instance;
use crate::naming::{to_storage, to_storage_name};
use crate::query_builder::{Statement, Table};
use crate::references;
use crate::schema::{Reference, Schema};
use crate::search::{compile, Lookup};
use crate::{Fields, Row};

/// Confirmation required by [`Model::destroy_all`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DestroyAll {
    pub yes_im_really_sure: bool,
}

#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelConfig>,
}

#[derive(Debug)]
struct ModelConfig {
    name: String,
    table: Arc<Table>,
    columns: Vec<String>,
    connection: Arc<dyn Connection>,
    references: IndexMap<String, Reference>,
    hooks: Hooks,
    debug: bool,
}

impl Model {
    /// Check and bind a schema. A missing connection, column list or table name is reported in
    /// that order.
    pub fn configure(schema: Schema) -> Result<Self, ModelError> {
        let connection = schema
            .connection
            .ok_or(ModelError::Configuration("connection"))?;
        let columns = schema.columns.ok_or(ModelError::Configuration("columns"))?;
        let table_name = schema.table.ok_or(ModelError::Configuration("table"))?;

        let table = Table::define(
            table_name,
            columns.iter().map(|column| to_storage_name(column)),
        );
        debug_log!(
            "[MODEL] configured {} on {} ({} columns, {} references)",
            schema.name,
            table.name(),
            columns.len(),
            schema.references.len()
        );

        Ok(Self {
            inner: Arc::new(ModelConfig {
                name: schema.name,
                table: Arc::new(table),
                columns,
                connection,
                references: schema.references,
                hooks: schema.hooks,
                debug: schema.debug.unwrap_or(false),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn table(&self) -> &Table {
        &self.inner.table
    }

    /// Declared columns in external convention.
    pub fn columns(&self) -> &[String] {
        &self.inner.columns
    }

    pub fn references(&self) -> &IndexMap<String, Reference> {
        &self.inner.references
    }

    pub fn hooks(&self) -> &Hooks {
        &self.inner.hooks
    }

    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.inner.connection
    }

    pub fn is_debug(&self) -> bool {
        self.inner.debug
    }

    /// Unpersisted instance carrying `fields` as given.
    pub fn instance(&self, fields: Fields) -> Instance {
        Instance::new(self.clone(), fields)
    }

    /// Insert one row and return it materialized.
    pub async fn create(&self, fields: Fields) -> Result<Instance, ModelError> {
        let values = to_storage(&fields);
        let statement = Statement::insert(Arc::clone(&self.inner.table), values).returning();

        self.inner.hooks.run_before_create(&fields).await?;

        let instance = self.return_one(statement).await?.ok_or_else(|| {
            ModelError::NotFound(format!("{} insert returned no row", self.name()))
        })?;

        self.inner.hooks.run_after_create(&instance, &fields).await?;
        Ok(instance)
    }

    /// First matching row, or `None`.
    pub async fn find_one(&self, lookup: impl Into<Lookup>) -> Result<Option<Instance>, ModelError> {
        let statement = self.construct_query(lookup.into(), None)?.limit(1);
        self.return_one(statement).await
    }

    /// Every matching row, in backend order.
    pub async fn find_many(&self, lookup: impl Into<Lookup>) -> Result<Vec<Instance>, ModelError> {
        let statement = self.construct_query(lookup.into(), None)?;
        self.return_many(statement).await
    }

    /// Update the matching rows with the declared-column subset of `fields`. Returns the first
    /// updated row, or `None` when nothing matched.
    pub async fn update(
        &self,
        lookup: impl Into<Lookup>,
        fields: Fields,
    ) -> Result<Option<Instance>, ModelError> {
        let lookup = lookup.into();
        let fields = self.only_column_values(&fields);
        self.log("update", "fields", &fields);

        if fields.is_empty() {
            return Err(ModelError::InvalidDescriptor(format!(
                "update of {} changes no declared column",
                self.name()
            )));
        }

        let changes = to_storage(&fields);
        self.log("update", "changes", &changes);

        let start = Statement::update(Arc::clone(&self.inner.table), changes);
        let statement = self.construct_query(lookup.clone(), Some(start))?.returning();

        if self.inner.hooks.has_before_update() {
            let existing = self.find_one(lookup).await?;
            self.inner.hooks.run_before_update(existing, &fields).await?;
        }

        let updated = self.return_one(statement).await?;

        if let Some(instance) = &updated {
            self.inner.hooks.run_after_update(instance, &fields).await?;
        }

        Ok(updated)
    }

    /// Number of matching rows.
    pub async fn count(&self, lookup: impl Into<Lookup>) -> Result<i64, ModelError> {
        let start = Statement::count(Arc::clone(&self.inner.table));
        let statement = self.construct_query(lookup.into(), Some(start))?;
        let rows = self.inner.connection.fetch(&statement).await?;

        let column = self.inner.table.count_column();
        match rows.first().and_then(|row| row.get(&column)) {
            Some(Value::Number(count)) => count
                .as_i64()
                .ok_or_else(|| ModelError::Backend(format!("\"{}\" is not an integer", column))),
            Some(Value::String(count)) => count
                .parse()
                .map_err(|_| ModelError::Backend(format!("\"{}\" is not an integer", column))),
            _ => Err(ModelError::Backend(format!(
                "count result is missing \"{}\"",
                column
            ))),
        }
    }

    /// Delete the matching rows. Returns how many were removed; matching nothing is not an error.
    pub async fn destroy(&self, lookup: impl Into<Lookup>) -> Result<u64, ModelError> {
        let lookup = lookup.into();
        let start = Statement::delete(Arc::clone(&self.inner.table));
        let statement = self.construct_query(lookup.clone(), Some(start))?;

        if self.inner.hooks.has_before_destroy() {
            let existing = self.find_one(lookup).await?;
            self.inner.hooks.run_before_destroy(existing).await?;
        }

        let removed = self.inner.connection.execute(&statement).await?;
        self.log("destroy", "removed", &removed);

        self.inner.hooks.run_after_destroy().await?;

        Ok(removed)
    }

    /// Delete every row of the table. Does nothing and returns `None` unless confirmed.
    pub async fn destroy_all(&self, confirm: DestroyAll) -> Result<Option<u64>, ModelError> {
        if !confirm.yes_im_really_sure {
            return Ok(None);
        }

        let statement = Statement::delete(Arc::clone(&self.inner.table));
        let removed = self.inner.connection.execute(&statement).await?;
        Ok(Some(removed))
    }

    /// Compile a lookup against this model's table, onto `start` when given.
    pub fn construct_query(
        &self,
        lookup: Lookup,
        start: Option<Statement>,
    ) -> Result<Statement, ModelError> {
        self.log("construct_query", "lookup", &lookup);
        let statement = compile(&self.inner.table, lookup, start)?;
        if self.inner.debug {
            self.log("construct_query", "query", &statement.to_query());
        }
        Ok(statement)
    }

    /// Keep only the keys naming a declared column.
    pub fn only_column_values(&self, fields: &Fields) -> Fields {
        fields
            .iter()
            .filter(|(key, _)| self.inner.columns.iter().any(|column| column == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    async fn return_one(&self, statement: Statement) -> Result<Option<Instance>, ModelError> {
        self.log("return_one", "statement", &statement.kind());
        let rows = self.inner.connection.fetch(&statement).await?;

        match rows.into_iter().next() {
            Some(row) => self.materialize(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn return_many(&self, statement: Statement) -> Result<Vec<Instance>, ModelError> {
        self.log("return_many", "statement", &statement.kind());
        let rows = self.inner.connection.fetch(&statement).await?;

        try_join_all(rows.into_iter().map(|row| self.materialize(row))).await
    }

    async fn materialize(&self, row: Row) -> Result<Instance, ModelError> {
        let instance = Instance::from_row(self.clone(), &row);
        references::expand(self, instance).await
    }

    fn log(&self, stage: &str, label: &str, detail: &dyn fmt::Debug) {
        if self.inner.debug {
            debug!(
                model = %self.inner.name,
                table = %self.inner.table.name(),
                "[{}] {}: {:?}",
                stage,
                label,
                detail
            );
        }
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("name", &self.inner.name)
            .field("table", &self.inner.table.name())
            .field("columns", &self.inner.columns)
            .field("references", &self.inner.references.keys().collect::<Vec<_>>())
            .field("hooks", &self.inner.hooks)
            .field("debug", &self.inner.debug)
            .finish()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}
