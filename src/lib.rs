//! # ModelHaus
//!
//! A minimal model layer for PostgreSQL: entity types configured from a schema, declarative
//! search descriptors instead of hand-written SQL, lifecycle hooks around mutations and
//! one round trip per declared relation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "modelhaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let mut modelhaus = ModelHaus::new(config).await?;
//!
//!     let account = modelhaus.register(
//!         Schema::new("Account").table("accounts").columns(["id", "createdAt"]),
//!     )?;
//!     let user = modelhaus.register(
//!         Schema::new("User")
//!             .table("users")
//!             .columns(["id", "accountId", "name", "isAdmin", "createdAt"])
//!             .reference("account", Reference::new(&account, "accountId")),
//!     )?;
//!
//!     let owner = account.create(Fields::new()).await?;
//!     let created = user
//!         .create(to_fields(&json!({ "accountId": owner.id(), "name": "Some User" }))?)
//!         .await?;
//!     println!("Created {}: {}", created, created.to_json());
//!
//!     let admins = user
//!         .find_many(Search::new().equals("isAdmin", true).order("name", SortOrder::Asc))
//!         .await?;
//!     println!("{} admins", admins.len());
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::ModelHaus;
pub use errors::ModelHausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, ModelsConfig};

// Re-export internal crates used by the public API
pub use model_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
