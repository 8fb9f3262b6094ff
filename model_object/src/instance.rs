//! Materialized records
//!
//! An [`Instance`] is one row of a model in external convention, plus whatever its declared
//! references resolved to. Instances are plain owned values; `save` and `destroy` go back
//! through the model that produced them.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::errors::ModelError;
use crate::model::Model;
use crate::naming::to_external;
use crate::search::Lookup;
use crate::{Fields, Row};

#[derive(Debug, Clone)]
pub struct Instance {
    model: Model,
    fields: Fields,
    relations: IndexMap<String, Option<Instance>>,
}

impl Instance {
    /// Unpersisted instance; `fields` are kept as given.
    pub fn new(model: Model, fields: Fields) -> Self {
        Self {
            model,
            fields,
            relations: IndexMap::new(),
        }
    }

    /// Instance from a raw row, keys translated to external convention.
    pub fn from_row(model: Model, row: &Row) -> Self {
        Self::new(model, to_external(row))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn class_name(&self) -> &str {
        self.model.name()
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    /// Whether the instance carries a truthy `id`, i.e. is assumed to exist in the table.
    pub fn is_persisted(&self) -> bool {
        match self.id() {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::Number(id)) => id.as_f64().is_some_and(|id| id != 0.0),
            Some(Value::String(id)) => !id.is_empty(),
            Some(_) => true,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Overwrite fields with every entry of `patch`.
    pub fn patch(&mut self, patch: Fields) -> &mut Self {
        for (field, value) in patch {
            self.fields.insert(field, value);
        }
        self
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// The instance a reference resolved to; `None` when undeclared or unresolved.
    pub fn related(&self, name: &str) -> Option<&Instance> {
        self.relations.get(name).and_then(Option::as_ref)
    }

    pub fn relations(&self) -> &IndexMap<String, Option<Instance>> {
        &self.relations
    }

    pub(crate) fn set_related(&mut self, name: String, related: Option<Instance>) {
        self.relations.insert(name, related);
    }

    /// Own fields with each resolved relation nested under its name (null when unresolved).
    pub fn to_json(&self) -> Value {
        let mut object = self.fields.clone();
        for (name, related) in &self.relations {
            let value = related.as_ref().map(Instance::to_json).unwrap_or(Value::Null);
            object.insert(name.clone(), value);
        }
        Value::Object(object)
    }

    /// Decode into a typed record (relations included, see [`Instance::to_json`]).
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ModelError> {
        Ok(serde_json::from_value(self.to_json())?)
    }

    /// Persist the instance with `extra` merged onto its fields: update by id when persisted,
    /// create otherwise. The stored row is merged back onto the instance.
    pub async fn save(&mut self, extra: Fields) -> Result<(), ModelError> {
        let mut merged = self.fields.clone();
        merged.extend(extra);

        let stored = if self.is_persisted() {
            let id = self.id().cloned().unwrap_or(Value::Null);
            self.model
                .update(Lookup::Id(id.clone()), merged.clone())
                .await?
                .ok_or_else(|| {
                    ModelError::NotFound(format!("{} with id {}", self.model.name(), id))
                })?
        } else {
            self.model.create(merged.clone()).await?
        };

        self.fields = merged;
        self.fields.extend(stored.fields);
        self.relations = stored.relations;
        Ok(())
    }

    /// Delete this instance's row. Returns the affected row count.
    pub async fn destroy(&self) -> Result<u64, ModelError> {
        if !self.is_persisted() {
            return Err(ModelError::NotFound(format!(
                "{} has no id to destroy",
                self.model.name()
            )));
        }

        let id = self.id().cloned().unwrap_or(Value::Null);
        self.model.destroy(Lookup::Id(id)).await
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.model.name() == other.model.name()
            && self.fields == other.fields
            && self.relations == other.relations
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model.name())
    }
}

/// Serialize a typed value into a field map (`create(to_fields(&new_user)?)`).
pub fn to_fields<T: Serialize>(value: &T) -> Result<Fields, ModelError> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(ModelError::InvalidDescriptor(format!(
            "expected a map of fields, got {}",
            other
        ))),
    }
}
