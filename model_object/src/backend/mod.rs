//! Query execution backends
//!
//! The model layer hands every compiled [`Statement`] to a [`Connection`]. Rows come back as
//! plain maps in storage convention; translating them is the model's job.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ModelError;
use crate::query_builder::Statement;
use crate::Row;

pub use memory::MemoryConnection;
pub use postgres::PgConnection;

#[async_trait]
pub trait Connection: Send + Sync + Debug {
    /// Run a statement and collect the rows it yields (`RETURNING *` rows for mutations).
    async fn fetch(&self, statement: &Statement) -> Result<Vec<Row>, ModelError>;

    /// Run a statement and report how many rows it affected.
    async fn execute(&self, statement: &Statement) -> Result<u64, ModelError>;
}
