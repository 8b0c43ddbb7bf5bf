use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwxError {
    #[error("resource not found: {message}")]
    NotFound { message: String },

    #[error("resource already exists: {message}")]
    Duplicate { message: String },

    #[error("AWX service error: {message}")]
    Service { message: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl AwxError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AwxError::NotFound {
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        AwxError::Duplicate {
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        AwxError::Service {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AwxError::NotFound { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AwxError::Duplicate { .. })
    }
}

pub type Result<T> = std::result::Result<T, AwxError>;
