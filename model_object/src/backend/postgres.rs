//! PostgreSQL backend over a sqlx pool.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::backend::Connection;
use crate::errors::ModelError;
use crate::query_builder::Statement;
use crate::Row;

#[derive(Debug, Clone)]
pub struct PgConnection {
    pool: PgPool,
}

impl PgConnection {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Connection for PgConnection {
    async fn fetch(&self, statement: &Statement) -> Result<Vec<Row>, ModelError> {
        let query = statement.to_query();
        trace_log!("[PG_FETCH] SQL: {} params: {}", query.text, query.values.len());

        let mut sqlx_query = sqlx::query(&query.text);
        for value in query.values {
            sqlx_query = type_mapping::bind_value(sqlx_query, value);
        }

        let rows = sqlx_query.fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| type_mapping::row_to_json(row).map_err(ModelError::from))
            .collect()
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, ModelError> {
        let query = statement.to_query();
        trace_log!("[PG_EXECUTE] SQL: {} params: {}", query.text, query.values.len());

        let mut sqlx_query = sqlx::query(&query.text);
        for value in query.values {
            sqlx_query = type_mapping::bind_value(sqlx_query, value);
        }

        let result = sqlx_query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
