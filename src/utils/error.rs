use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog source error: {message}")]
    SourceError { message: String },

    #[error("Catalog row parse error in field '{field}': {reason}")]
    RowParseError { field: String, reason: String },

    #[error("Answer generation failed: {message}")]
    GenerationError { message: String },
}

pub type Result<T> = std::result::Result<T, TourError>;
