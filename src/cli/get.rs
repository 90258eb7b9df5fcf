//! Get command implementation
//!
//! Reads a batch of secrets behind one presence check and prints the
//! per-key report as JSON on stdout. Individual key failures appear as
//! error markers in the report; only authorization failures are fatal.

use sesame_core::error::SesameError;
use sesame_core::gate::PresencePolicy;
use sesame_core::vault::executor::VaultAction;
use tracing::debug;

/// Run the get command
pub async fn run_get(
    keys: Vec<String>,
    totp_keys: Vec<String>,
    policy: PresencePolicy,
) -> Result<(), SesameError> {
    debug!(
        plain = keys.len(),
        totp = totp_keys.len(),
        "running get action"
    );

    let executor = super::build_executor()?;
    let output = executor
        .run(VaultAction::Get { keys, totp_keys }, policy)
        .await?;
    super::render(output)
}
