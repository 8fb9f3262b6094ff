//! Core ModelHaus functionality
//!
//! This module contains the main ModelHaus struct and its implementation, which owns the shared
//! connection and the configured models by name.

use model_object::{Connection, Model, PgConnection, Schema};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::errors::ModelHausError;
use config::{AppConfig, DatabaseConfig, ModelsConfig};

/// Main ModelHaus coordinator that manages the connection and configured models
pub struct ModelHaus {
    connection: Arc<dyn Connection>,
    pool: Option<PgPool>,
    defaults: ModelsConfig,
    models: HashMap<String, Model>,
}

impl ModelHaus {
    /// Create new ModelHaus with a PostgreSQL connection pool
    pub async fn new(config: DatabaseConfig) -> Result<Self, ModelHausError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self {
            connection: Arc::new(PgConnection::new(pool.clone())),
            pool: Some(pool),
            defaults: ModelsConfig::default(),
            models: HashMap::new(),
        })
    }

    /// Create new ModelHaus from a loaded application configuration
    pub async fn from_config(config: AppConfig) -> Result<Self, ModelHausError> {
        let mut modelhaus = Self::new(config.database).await?;
        modelhaus.defaults = config.models;
        Ok(modelhaus)
    }

    /// Create new ModelHaus over any connection (no pool)
    pub fn with_connection(connection: Arc<dyn Connection>) -> Self {
        Self {
            connection,
            pool: None,
            defaults: ModelsConfig::default(),
            models: HashMap::new(),
        }
    }

    /// Replace the defaults applied to schemas at registration
    pub fn with_defaults(mut self, defaults: ModelsConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Get database pool reference, when backed by PostgreSQL
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Shared connection handed to schemas that do not bring their own
    pub fn connection(&self) -> Arc<dyn Connection> {
        Arc::clone(&self.connection)
    }

    /// Configure a schema and register the resulting model under its name
    pub fn register(&mut self, schema: Schema) -> Result<Model, ModelHausError> {
        let name = schema.name().to_string();
        if self.models.contains_key(&name) {
            return Err(ModelHausError::ModelAlreadyRegistered(name));
        }

        let mut schema = schema;
        if !schema.has_connection() {
            schema = schema.connection(self.connection());
        }
        if !schema.has_debug() {
            schema = schema.debug(self.defaults.debug);
        }

        let model = Model::configure(schema)?;
        debug!(model = %name, table = %model.table().name(), "registered model");

        self.models.insert(name, model.clone());
        Ok(model)
    }

    /// Get a registered model by name
    pub fn model(&self, name: &str) -> Result<Model, ModelHausError> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| ModelHausError::ModelNotFound(name.to_string()))
    }

    /// List all registered model names
    pub fn list_models(&self) -> Vec<&String> {
        self.models.keys().collect()
    }

    /// Remove a model by name
    pub fn unregister(&mut self, name: &str) -> Result<Model, ModelHausError> {
        self.models
            .remove(name)
            .ok_or_else(|| ModelHausError::ModelNotFound(name.to_string()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), ModelHausError> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").fetch_one(pool).await?;
        }
        Ok(())
    }
}
