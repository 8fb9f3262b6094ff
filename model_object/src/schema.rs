//! Entity schema
//!
//! Everything one entity type is configured from. A schema is only a description; it becomes
//! usable once [`Model::configure`](crate::Model::configure) has checked and bound it.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::backend::Connection;
use crate::hooks::Hooks;
use crate::model::Model;

/// Relation declaration: the local field `key` holds the id of a `model` row.
#[derive(Debug, Clone)]
pub struct Reference {
    pub model: Model,
    pub key: String,
}

impl Reference {
    pub fn new(model: &Model, key: impl Into<String>) -> Self {
        Self {
            model: model.clone(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) name: String,
    pub(crate) connection: Option<Arc<dyn Connection>>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Option<Vec<String>>,
    pub(crate) references: IndexMap<String, Reference>,
    pub(crate) hooks: Hooks,
    pub(crate) debug: Option<bool>,
}

impl Schema {
    /// Start a schema for the entity type called `name` (`"User"`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection: None,
            table: None,
            columns: None,
            references: IndexMap::new(),
            hooks: Hooks::default(),
            debug: None,
        }
    }

    pub fn connection(mut self, connection: Arc<dyn Connection>) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Declared columns, in external convention (`"createdAt"`).
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Declare a relation resolved onto every materialized instance under `name`.
    pub fn reference(mut self, name: impl Into<String>, reference: Reference) -> Self {
        self.references.insert(name.into(), reference);
        self
    }

    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_connection(&self) -> bool {
        self.connection.is_some()
    }

    /// Whether `debug` was set explicitly.
    pub fn has_debug(&self) -> bool {
        self.debug.is_some()
    }
}
