//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

/// Wrapper for plain secret values moving between the store and the caller
///
/// Covers both values being stored and values just retrieved; the inner
/// string is never printed by `Debug`.
#[derive(Clone, Debug)]
pub struct SecretValue(Secret<String>);

impl SecretValue {
    /// Create a new SecretValue from a plain string
    pub fn new(value: String) -> Self {
        Self(Secret::new(value))
    }

    /// Expose the value (use with caution!)
    ///
    /// This should only be called at the store boundary or when
    /// rendering the final report.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Wrapper for Base32-encoded TOTP seeds retrieved from the store
#[derive(Clone, Debug)]
pub struct TotpSeed(Secret<String>);

impl TotpSeed {
    /// Create a new TotpSeed from a Base32-encoded string
    pub fn new(seed: String) -> Self {
        Self(Secret::new(seed))
    }

    /// Expose the seed value (use with caution!)
    ///
    /// This should only be called when passing the seed to the
    /// Base32 decoder.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for TotpSeed {
    fn from(seed: String) -> Self {
        Self::new(seed)
    }
}

/// Wrapper for generated TOTP codes
///
/// Generated codes are short-lived but still sensitive; they are only
/// exposed when written into the report handed back to the caller.
#[derive(Clone, Debug)]
pub struct TotpCode(Secret<String>);

impl TotpCode {
    /// Create a new TotpCode from a generated code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for TotpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}
