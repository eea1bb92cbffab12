/// Unified error type for TabRS
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabrsError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Parsing errors
    #[error("Parse error: {0}")]
    Parse(String),

    // Configuration errors
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Store errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(String),

    // Generic error for compatibility
    #[error("{0}")]
    Other(String),

    // Boxed error for dynamic error types
    #[error("Error: {0}")]
    Boxed(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias using TabrsError
pub type Result<T> = std::result::Result<T, TabrsError>;

impl TabrsError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput(name.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

// Conversion from String for convenience
impl From<String> for TabrsError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

// Conversion from &str for convenience
impl From<&str> for TabrsError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TabrsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
