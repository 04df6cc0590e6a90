//! Error types for the loanlens scoring pipeline

use thiserror::Error;

/// Result type alias for loanlens operations
pub type Result<T> = std::result::Result<T, LoanlensError>;

/// Main error type for the scoring pipeline
#[derive(Error, Debug)]
pub enum LoanlensError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Artifact error: {0}")]
    ArtifactError(String),

    #[error("Schema mismatch: {0}")]
    SchemaError(String),

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<polars::error::PolarsError> for LoanlensError {
    fn from(err: polars::error::PolarsError) -> Self {
        LoanlensError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for LoanlensError {
    fn from(err: serde_json::Error) -> Self {
        LoanlensError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoanlensError::SchemaError("column 3 differs".to_string());
        assert_eq!(err.to_string(), "Schema mismatch: column 3 differs");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LoanlensError = io_err.into();
        assert!(matches!(err, LoanlensError::IoError(_)));
    }
}
