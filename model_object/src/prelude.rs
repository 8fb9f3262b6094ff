//! Convenience re-exports for common model-object usage

// Entity types and records
pub use crate::instance::{to_fields, Instance};
pub use crate::model::{DestroyAll, Model};
pub use crate::schema::{Reference, Schema};

// Lookups
pub use crate::query_builder::{FilterOperator, SortOrder};
pub use crate::search::{Lookup, Search};

// Lifecycle hooks
pub use crate::hooks::Hooks;

// Backends
pub use crate::backend::{Connection, MemoryConnection, PgConnection};

// Error types
pub use crate::errors::ModelError;

pub use crate::{Fields, Row};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};
