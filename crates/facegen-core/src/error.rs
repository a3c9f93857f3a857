use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaceGenError>;

#[derive(Debug, Error)]
pub enum FaceGenError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("sink error: {0}")]
    Sink(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
