//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands,
//! plus the shared wiring between config, store, gate, and executor.

use crate::presence::ConsoleVerifier;
use colored::Colorize;
use sesame_core::config::toml_config::load_config;
use sesame_core::error::SesameError;
use sesame_core::gate::AuthorizationGate;
use sesame_core::vault::executor::{ActionOutput, VaultExecutor};
use sesame_core::vault::store::KeyringStore;

pub mod delete;
pub mod get;
pub mod set;

/// Build the executor from the user's configuration
///
/// The keyring namespace and TOTP defaults come from the config file;
/// the presence check is the interactive terminal confirmation.
pub(crate) fn build_executor() -> Result<VaultExecutor<KeyringStore, ConsoleVerifier>, SesameError>
{
    let config = load_config()?;
    let store = KeyringStore::new(&config.vault.service);
    let gate = AuthorizationGate::new(ConsoleVerifier::new());
    Ok(VaultExecutor::new(store, gate, config.totp_parameters()))
}

/// Render an action's output to stdout
///
/// Reports go out as pretty-printed JSON (machine-parsable); status
/// lines are printed as-is, in green.
pub(crate) fn render(output: ActionOutput) -> Result<(), SesameError> {
    match output {
        ActionOutput::Report(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        ActionOutput::Status(line) => {
            println!("{}", line.green());
        }
    }
    Ok(())
}
