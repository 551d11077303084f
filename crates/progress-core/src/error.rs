use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("feature list not found: run /start-project to initialize the project")]
    NotInitialized,

    #[error("invalid JSON in {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("feature not found: {0}")]
    FeatureNotFound(u64),

    #[error("duplicate feature id: {0}")]
    DuplicateId(u64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProgressError>;
