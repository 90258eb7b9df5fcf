//! Error types for the sesame secret vault
//!
//! This module defines all error types used throughout the application,
//! providing consistent error handling and user-friendly error messages.

use thiserror::Error;

/// Main error type for the sesame application
#[derive(Error, Debug)]
pub enum SesameError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors from the secret store backend
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the authorization gate
    #[error("Authorization error: {0}")]
    Gate(#[from] GateError),

    /// Errors decoding Base32 TOTP seeds
    #[error("Seed error: {0}")]
    Decode(#[from] DecodeError),

    /// Errors generating TOTP codes
    #[error("TOTP error: {0}")]
    Totp(#[from] GenerationError),

    /// Malformed action arguments that slipped past the CLI layer
    #[error("Invalid action: {message}")]
    InvalidAction { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Failed to save configuration file: {path}")]
    SaveFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Secret store backend errors
///
/// The backend is opaque to the core: anything that is not a clean
/// not-found is reported with the backend's own message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("secret not found")]
    NotFound,

    #[error("store backend error: {message}")]
    Backend { message: String },

    #[error("store service unavailable: {message}")]
    Unavailable { message: String },
}

/// Authorization gate errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    #[error("an authorization request is already in progress")]
    Busy,

    #[error("device-owner authentication is not supported here: {reason}")]
    Unsupported { reason: String },

    #[error("authorization denied: {reason}")]
    Denied { reason: String },

    #[error("authorization unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("the authorization provider dropped the request without an outcome")]
    OutcomeLost,
}

/// Base32 seed decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base32 character at position {position}")]
    InvalidCharacter { position: usize },

    #[error("base32 input does not decode to whole bytes")]
    InvalidLength,
}

/// TOTP generation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("TOTP seed is empty")]
    EmptySeed,

    #[error("invalid TOTP parameters: {reason}")]
    InvalidParameters { reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SesameError>;
