use thiserror::Error;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("On-device model is unavailable")]
    BackendUnavailable,

    #[error("No user profile has been set up")]
    MissingProfile,

    #[error("Model response is not usable: {message}")]
    MalformedResponse { message: String },

    #[error("Expected {expected} values but the model returned {got}")]
    CountMismatch { expected: usize, got: usize },

    #[error("Inference failed: {message}")]
    InferenceError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

pub type Result<T> = std::result::Result<T, FillError>;
