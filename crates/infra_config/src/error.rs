//! Configuration error type.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error reading {path}: {message}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error text
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more validation failures
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ConfigError {
    /// Validation messages, empty for other variants.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert_eq!(display, "Validation errors: Error 1; Error 2");
        assert_eq!(error.messages().len(), 2);
        assert!(ConfigError::Parse("x".into()).messages().is_empty());
    }
}
