use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{0} is required!")]
    Configuration(&'static str),

    #[error("No column \"{column}\" found in schema. Make sure \"{column}\" is defined in your list of columns in your configuration.")]
    UnknownColumn { column: String },

    #[error("Unknown filter operator \"{0}\"")]
    UnknownOperator(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid search descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Reference \"{reference}\" expects field \"{key}\" on the record")]
    MissingForeignKey { reference: String, key: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{hook} hook failed: {source}")]
    Hook {
        hook: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }

    pub(crate) fn hook(hook: &'static str, source: anyhow::Error) -> Self {
        Self::Hook { hook, source }
    }
}
