//! sesame - device-owner gated secret vault CLI
//!
//! Retrieve, store, and delete named secrets behind a single
//! device-owner presence check, with derived TOTP codes for keys
//! whose stored value is a Base32 seed.

use clap::{Parser, Subcommand};
use sesame_core::error::SesameError;
use sesame_core::gate::PresencePolicy;
use sesame_core::init_logging;

mod cli;
mod presence;

#[derive(Parser)]
#[command(name = "sesame")]
#[command(about = "Device-owner gated secret vault with TOTP generation")]
struct Cli {
    /// Require biometric authentication, with no fallback
    #[arg(long, global = true)]
    biometric_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve secrets and derived TOTP codes as a JSON report
    Get {
        /// Keys to read as plain values
        keys: Vec<String>,

        /// Keys whose stored value is a TOTP seed; the report carries
        /// the current code instead of the seed
        #[arg(long = "totp", num_args = 1.., value_name = "KEY")]
        totp: Vec<String>,
    },
    /// Store one secret, creating or overwriting
    Set {
        /// Key to store under
        key: String,
        /// Value to store
        value: String,
    },
    /// Delete a secret (first key only)
    Delete {
        /// Key to delete; extra keys are ignored
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();
    let policy = if cli.biometric_only {
        PresencePolicy::BiometricOnly
    } else {
        PresencePolicy::BiometricOrFallback
    };

    let result = match cli.command {
        Commands::Get { keys, totp } => cli::get::run_get(keys, totp, policy).await,
        Commands::Set { key, value } => cli::set::run_set(key, value, policy).await,
        Commands::Delete { keys } => cli::delete::run_delete(keys, policy).await,
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Configuration and usage errors (exit code 2)
                SesameError::Config(_) | SesameError::Toml(_) | SesameError::TomlSerialize(_) => 2,
                SesameError::InvalidAction { .. } => 2,
                // Authorization failures (exit code 1)
                SesameError::Gate(_) => 1,
                // Store failures in set/delete (exit code 1)
                SesameError::Store(_) => 1,
                // Seed/TOTP errors reaching this level (exit code 1)
                SesameError::Decode(_) | SesameError::Totp(_) => 1,
                // IO/serialization errors (exit code 1)
                SesameError::Io(_) | SesameError::Json(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
