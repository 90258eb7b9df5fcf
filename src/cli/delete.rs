//! Delete command implementation
//!
//! Deletes the first named secret behind a presence check. Extra keys
//! on the command line are accepted but deliberately left untouched.

use sesame_core::error::SesameError;
use sesame_core::gate::PresencePolicy;
use sesame_core::vault::executor::VaultAction;
use tracing::debug;

/// Run the delete command
pub async fn run_delete(keys: Vec<String>, policy: PresencePolicy) -> Result<(), SesameError> {
    debug!(key = %keys.first().map(String::as_str).unwrap_or(""), "running delete action");

    let executor = super::build_executor()?;
    let output = executor.run(VaultAction::Delete { keys }, policy).await?;
    super::render(output)
}
