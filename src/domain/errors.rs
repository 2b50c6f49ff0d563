//! Domain error types
//!
//! This module defines the error hierarchy for Orderlift. All errors are
//! domain-specific and don't expose third-party types at the public surface.

use thiserror::Error;

/// Main Orderlift error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source platform errors
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Target store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Import process errors
    #[error("Import error: {0}")]
    Import(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Source-platform-specific errors
///
/// Errors that occur when talking to the e-commerce platform API.
/// These errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to connect to the platform
    #[error("Failed to connect to platform: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the platform
    #[error("Invalid response from platform: {0}")]
    InvalidResponse(String),

    /// Order not found
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Target-store-specific errors
///
/// Transport-level defects from the order-management store. Persistence
/// rejections are not errors at this level; the store contract reports
/// them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Existence query failed
    #[error("Existence query failed: {0}")]
    QueryFailed(String),

    /// Record could not be serialized for the store
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ImportError {
    fn from(err: toml::de::Error) -> Self {
        ImportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_display() {
        let err = ImportError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_platform_error_conversion() {
        let platform_err = PlatformError::ConnectionFailed("Network error".to_string());
        let err: ImportError = platform_err.into();
        assert!(matches!(err, ImportError::Platform(_)));
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::QueryFailed("timeout".to_string());
        let err: ImportError = store_err.into();
        assert!(matches!(err, ImportError::Store(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ImportError = io_err.into();
        assert!(matches!(err, ImportError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ImportError = toml_err.into();
        assert!(matches!(err, ImportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &ImportError::Validation("test".to_string());
        let _: &dyn std::error::Error = &PlatformError::Timeout("10s".to_string());
        let _: &dyn std::error::Error = &StoreError::ConnectionFailed("refused".to_string());
    }
}
