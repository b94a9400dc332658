//! CLI error types.

use docnav_config::ConfigError;
use docnav_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown section \"{0}\"")]
    UnknownSection(String),

    #[error("No page at \"{path}\"")]
    RouteNotFound { path: String },
}
