use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranspositionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Key must contain at least one symbol")]
    EmptyKey,

    #[error("Grid width must be at least 1")]
    ZeroWidth,

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}

pub type Result<T> = std::result::Result<T, TranspositionError>;
