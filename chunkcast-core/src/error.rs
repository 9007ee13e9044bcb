use thiserror::Error;

#[derive(Error, Debug)]
pub enum CastError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sink error: {0}")]
    Sink(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Verify error: {0}")]
    Verify(String),

    #[error("Upload failed: {0}")]
    Upload(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, CastError>;
