//! Error handling for the membership library
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for membership operations
pub type Result<T> = std::result::Result<T, MembershipError>;

/// Main error type for the membership library
#[derive(Error, Debug)]
pub enum MembershipError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors (invalid or missing arguments)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown digest algorithm requested
    #[error("Unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Store errors (backend unreachable or query failed)
    #[error("Store error: {0}")]
    Store(String),

    /// Data errors (rows missing expected columns or holding malformed values)
    #[error("Data error: {0}")]
    Data(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Helper functions for creating specific errors
impl MembershipError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unsupported_algorithm<S: Into<String>>(algorithm: S) -> Self {
        Self::UnsupportedAlgorithm(algorithm.into())
    }

    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store(message.into())
    }

    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }
}
