//! Convenience re-exports for common ModelHaus usage
//!
//! This prelude module re-exports the most commonly used items from the ModelHaus ecosystem,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use modelhaus::prelude::*;
//!
//! let search = Search::new().ilike("name", "j%").limit(10);
//! ```

// Core ModelHaus components
pub use crate::core::ModelHaus;
pub use crate::errors::ModelHausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, ModelsConfig};

// Re-export commonly used model-object types for convenience
pub use model_object::prelude::*;

// Re-export model_object module
pub use model_object;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::PgPool;
