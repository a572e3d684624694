//! Error types for wordrank
//!
//! Every fallible entry point returns [`Result`]. Empty input and isolated
//! words are not errors; only bad configuration and collaborator failures are.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for wordrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The linguistic preprocessor could not annotate the input
    #[error("Preprocessing failed: {message}")]
    Preprocessing { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextRankError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a preprocessing error
    pub fn preprocessing(message: impl Into<String>) -> Self {
        Self::Preprocessing {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error was raised by configuration validation
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

impl From<serde_json::Error> for TextRankError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextRankError::invalid_config("window_size must be >= 2");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("window_size"));

        let err = TextRankError::preprocessing("tagger unavailable");
        assert_eq!(err.to_string(), "Preprocessing failed: tagger unavailable");
    }

    #[test]
    fn test_is_invalid_config() {
        assert!(TextRankError::invalid_config("bad").is_invalid_config());
        assert!(!TextRankError::preprocessing("bad").is_invalid_config());
    }

    #[test]
    fn test_from_serde_json() {
        let err: TextRankError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, TextRankError::Serialization { .. }));
    }
}
