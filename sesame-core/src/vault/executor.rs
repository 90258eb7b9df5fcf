//! Vault operation execution
//!
//! Orchestrates a requested action against the secret store once the
//! authorization gate grants access. One authorization covers the whole
//! batch; per-key work is sequential so report ordering and error
//! isolation stay deterministic.

use crate::error::{GateError, SesameError};
use crate::gate::{AuthorizationGate, PresenceOutcome, PresencePolicy, PresenceVerifier};
use crate::otp::base32;
use crate::otp::totp::{self, TotpParameters};
use crate::types::{SecretValue, TotpSeed};
use crate::vault::store::SecretStore;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// A requested vault action
#[derive(Debug, Clone)]
pub enum VaultAction {
    /// Read plain secrets, and derive TOTP codes for seed-valued keys
    Get {
        keys: Vec<String>,
        totp_keys: Vec<String>,
    },

    /// Store one secret, creating or overwriting
    Set { key: String, value: SecretValue },

    /// Delete the first named secret; extra keys are ignored
    Delete { keys: Vec<String> },
}

/// Per-key result inside a vault report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// The stored value, or a derived TOTP code
    Value(String),

    /// Why this key produced no value
    Error(String),
}

/// Order-preserving key -> value-or-error mapping produced by `get`
///
/// Serializes as a JSON object in request order. Failed keys carry an
/// explicit `{"error": "…"}` marker instead of vanishing from the
/// output. Immutable once handed back to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VaultReport {
    entries: Vec<(String, ReportEntry)>,
}

impl VaultReport {
    fn push_value(&mut self, key: &str, value: String) {
        self.entries
            .push((key.to_string(), ReportEntry::Value(value)));
    }

    fn push_error(&mut self, key: &str, message: String) {
        self.entries
            .push((key.to_string(), ReportEntry::Error(message)));
    }

    /// All entries in request order
    pub fn entries(&self) -> &[(String, ReportEntry)] {
        &self.entries
    }

    /// Look up the entry for `key`
    pub fn entry(&self, key: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Number of entries in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(serde::Serialize)]
struct ErrorMarker<'a> {
    error: &'a str,
}

impl Serialize for VaultReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            match entry {
                ReportEntry::Value(value) => map.serialize_entry(key, value)?,
                ReportEntry::Error(message) => {
                    map.serialize_entry(key, &ErrorMarker { error: message })?
                }
            }
        }
        map.end()
    }
}

/// Result of a completed vault action
#[derive(Debug)]
pub enum ActionOutput {
    /// Per-key report from `get`
    Report(VaultReport),

    /// Status line from `set`/`delete`, naming the key acted on
    Status(String),
}

/// Executes vault actions behind a single presence check
pub struct VaultExecutor<S: SecretStore, V: PresenceVerifier> {
    store: S,
    gate: AuthorizationGate<V>,
    totp: TotpParameters,
}

impl<S: SecretStore, V: PresenceVerifier> VaultExecutor<S, V> {
    /// Create an executor over a store, a gate, and TOTP defaults
    pub fn new(store: S, gate: AuthorizationGate<V>, totp: TotpParameters) -> Self {
        Self { store, gate, totp }
    }

    /// Execute one action behind a single authorization
    ///
    /// # Errors
    ///
    /// Gate failures (busy, unsupported, denied, unavailable, lost
    /// outcome) are fatal and happen before any store access. Store
    /// failures are fatal for `set`/`delete`; during `get` they become
    /// per-key report markers instead.
    pub async fn run(
        &self,
        action: VaultAction,
        policy: PresencePolicy,
    ) -> Result<ActionOutput, SesameError> {
        let reason = authorization_reason(&action);
        match self.gate.authorize(reason, policy).await? {
            PresenceOutcome::Granted => {}
            PresenceOutcome::Denied(reason) => {
                return Err(GateError::Denied { reason }.into());
            }
            PresenceOutcome::Unavailable(reason) => {
                return Err(GateError::Unavailable { reason }.into());
            }
        }
        info!("authorization granted");

        match action {
            VaultAction::Get { keys, totp_keys } => {
                Ok(ActionOutput::Report(self.run_get(&keys, &totp_keys)))
            }
            VaultAction::Set { key, value } => self.run_set(&key, &value).map(ActionOutput::Status),
            VaultAction::Delete { keys } => self.run_delete(&keys).map(ActionOutput::Status),
        }
    }

    /// Build the report for a batch of plain and TOTP keys
    ///
    /// Strictly sequential, in request order: plain keys first, then
    /// TOTP keys. A failed key becomes an error marker and the batch
    /// carries on.
    fn run_get(&self, keys: &[String], totp_keys: &[String]) -> VaultReport {
        let mut report = VaultReport::default();

        for key in keys {
            match self.store.get(key) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(value) => report.push_value(key, value),
                    Err(_) => {
                        warn!(key = %key, "stored value is not valid UTF-8");
                        report.push_error(key, "stored value is not valid UTF-8".to_string());
                    }
                },
                Err(e) => {
                    warn!(key = %key, error = %e, "secret lookup failed");
                    report.push_error(key, e.to_string());
                }
            }
        }

        for key in totp_keys {
            match self.derive_code(key) {
                Ok(code) => report.push_value(key, code),
                Err(message) => {
                    warn!(key = %key, error = %message, "TOTP derivation failed");
                    report.push_error(key, message);
                }
            }
        }

        report
    }

    /// Fetch the seed for `key`, decode it, and derive the current code
    fn derive_code(&self, key: &str) -> Result<String, String> {
        let bytes = self.store.get(key).map_err(|e| e.to_string())?;
        let seed = String::from_utf8(bytes)
            .map(TotpSeed::new)
            .map_err(|_| "stored seed is not valid UTF-8".to_string())?;
        let raw = base32::decode(seed.expose()).map_err(|e| e.to_string())?;
        let code = totp::generate(&raw, &self.totp, unix_now()?).map_err(|e| e.to_string())?;
        Ok(code.expose().to_string())
    }

    fn run_set(&self, key: &str, value: &SecretValue) -> Result<String, SesameError> {
        self.store
            .set(key, value.expose().as_bytes())
            .map_err(SesameError::Store)?;
        info!(key = %key, "secret stored");
        Ok(format!("Key {key} has been successfully set in the vault"))
    }

    /// Delete the first key only; extra keys are left untouched
    fn run_delete(&self, keys: &[String]) -> Result<String, SesameError> {
        let key = keys.first().ok_or_else(|| SesameError::InvalidAction {
            message: "the delete action requires at least one key".to_string(),
        })?;
        self.store.delete(key).map_err(SesameError::Store)?;
        info!(key = %key, "secret deleted");
        Ok(format!(
            "Key {key} has been successfully deleted from the vault"
        ))
    }
}

/// Reason string shown to the user for each action
fn authorization_reason(action: &VaultAction) -> &'static str {
    match action {
        VaultAction::Get { .. } => "access your vault items",
        VaultAction::Set { .. } => "store a secret in your vault",
        VaultAction::Delete { .. } => "delete a secret from your vault",
    }
}

/// Current unix time in seconds, as a per-key error message on failure
fn unix_now() -> Result<u64, String> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| "system clock is before the unix epoch".to_string())
}
