//! Core library for the sesame secret vault CLI
//!
//! This crate provides the vault access protocol: an authorization
//! gate around a pluggable secret store, plus Base32/TOTP derivation
//! for seed-valued secrets.

pub mod error;
pub mod types;

pub mod config;
pub mod gate;
pub mod otp;
pub mod vault;

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging for production use.
/// In development, logs to stderr with appropriate formatting.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Try to use systemd journal logging if available
    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            // We're running under systemd, use journal logging
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(tracing_subscriber::filter::LevelFilter::INFO)
                .init();
            return Ok(());
        }
    }

    // Fallback to stderr logging with pretty formatting
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    Ok(())
}
