//! Configuration module
//!
//! Handles loading and saving vault configuration from TOML files.
//! Secrets themselves never live here, only the store namespace and
//! TOTP derivation settings.

use crate::otp::totp::{HashAlgorithm, TotpParameters};
use serde::{Deserialize, Serialize};

pub mod toml_config;

/// Where vault entries live in the OS keyring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultSettings {
    /// Keyring service namespace scoping this vault's entries
    pub service: String,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            service: "sesame-vault".to_string(),
        }
    }
}

/// TOTP derivation settings applied to `get --totp` keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotpSettings {
    /// Number of code digits (default: 6)
    pub digits: u32,

    /// Time step in seconds (default: 30)
    pub step: u64,

    /// HMAC hash algorithm (default: sha1)
    pub algorithm: HashAlgorithm,
}

impl Default for TotpSettings {
    fn default() -> Self {
        Self {
            digits: 6,
            step: 30,
            algorithm: HashAlgorithm::Sha1,
        }
    }
}

/// Complete sesame configuration
///
/// Both sections are optional in the file; absent sections fall back
/// to their defaults so the tool works without any configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SesameConfig {
    /// Vault storage settings
    #[serde(default)]
    pub vault: VaultSettings,

    /// TOTP derivation settings
    #[serde(default)]
    pub totp: TotpSettings,
}

impl SesameConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.vault.service.is_empty() {
            return Err("Vault service namespace cannot be empty".to_string());
        }

        if !(1..=10).contains(&self.totp.digits) {
            return Err(format!(
                "TOTP digits must be between 1 and 10, got {}",
                self.totp.digits
            ));
        }

        if self.totp.step == 0 {
            return Err("TOTP time step cannot be zero".to_string());
        }

        Ok(())
    }

    /// Convert the TOTP settings into engine parameters
    pub fn totp_parameters(&self) -> TotpParameters {
        TotpParameters {
            digits: self.totp.digits,
            step: self.totp.step,
            algorithm: self.totp.algorithm,
            epoch: 0,
        }
    }
}
