//! Model Object - Core mapping layer for ModelHaus
//!
//! This crate provides the configured entity types ([`Model`]), the materialized records they
//! return ([`Instance`]), the search descriptor compiler and the statement builder, plus the
//! [`Connection`] seam the statements are executed through.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod backend;
pub mod errors;
pub mod hooks;
pub mod instance;
pub mod model;
pub mod naming;
pub mod prelude;
pub mod query_builder;
pub mod references;
pub mod schema;
pub mod search;

pub use backend::{Connection, MemoryConnection, PgConnection};
pub use errors::ModelError;
pub use hooks::{Hook, HookFuture, Hooks};
pub use instance::Instance;
pub use model::{DestroyAll, Model};
pub use query_builder::{Condition, FilterOperator, Query, SortOrder, Statement, StatementKind, Table};
pub use schema::{Reference, Schema};
pub use search::{Filter, Lookup, Search};

/// Record fields in external (camelCase) convention.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Raw row in storage (snake_case) convention.
pub type Row = serde_json::Map<String, serde_json::Value>;
