use thiserror::Error;

#[derive(Error, Debug)]
pub enum OasGuardError {
    /// The schema itself is malformed for a keyword the engine interprets.
    #[error("Schema error at {location}: {message}")]
    SchemaError { location: String, message: String },

    #[error("Unresolvable $ref pointer: {0}")]
    UnresolvedRef(String),

    #[error("Circular $ref chain through: {0}")]
    CircularRef(String),

    #[error("Maximum validation depth of {limit} exceeded at {location}")]
    DepthExceeded { location: String, limit: usize },

    #[error("Failed to load document: {0}")]
    DocumentLoadError(String),

    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OasGuardError {
    pub fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        OasGuardError::SchemaError {
            location: location.into(),
            message: message.into(),
        }
    }

    /// True when the failure points at a broken schema document rather than
    /// at the environment (files, sockets, encodings).
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            OasGuardError::SchemaError { .. }
                | OasGuardError::UnresolvedRef(_)
                | OasGuardError::CircularRef(_)
                | OasGuardError::DepthExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, OasGuardError>;
