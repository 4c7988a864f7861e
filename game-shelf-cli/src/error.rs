use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Resolution pipeline failure (already user-facing)
    #[error("{0}")]
    Resolve(#[from] game_shelf_core::ResolveError),

    /// Catalog client or credential failure
    #[error("{0}")]
    Catalog(#[from] game_shelf_catalog::CatalogError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] game_shelf_db::OperationError),

    /// Database schema error
    #[error("Database error: {0}")]
    Schema(#[from] game_shelf_db::SchemaError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
