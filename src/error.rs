use std::fmt;

/// Result type for trendlog operations
pub type Result<T> = std::result::Result<T, TrendlogError>;

/// Main error type for the trendlog library
#[derive(Debug, Clone)]
pub enum TrendlogError {
    /// Array shapes that should agree do not
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid configuration or argument value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (snapshot files, telemetry output, exports)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// A value could not be turned into a finite scalar
    Coercion(String),
}

impl fmt::Display for TrendlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendlogError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            TrendlogError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            TrendlogError::IoError(msg) => write!(f, "IO error: {}", msg),
            TrendlogError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            TrendlogError::Coercion(msg) => write!(f, "Scalar coercion failed: {}", msg),
        }
    }
}

impl std::error::Error for TrendlogError {}

impl From<std::io::Error> for TrendlogError {
    fn from(err: std::io::Error) -> Self {
        TrendlogError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for TrendlogError {
    fn from(err: serde_json::Error) -> Self {
        TrendlogError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl TrendlogError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        TrendlogError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        TrendlogError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
