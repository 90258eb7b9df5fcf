//! Set command implementation
//!
//! Stores exactly one key/value pair behind a presence check. The
//! store upserts, so setting an existing key overwrites it.

use sesame_core::error::SesameError;
use sesame_core::gate::PresencePolicy;
use sesame_core::types::SecretValue;
use sesame_core::vault::executor::VaultAction;
use tracing::debug;

/// Run the set command
pub async fn run_set(key: String, value: String, policy: PresencePolicy) -> Result<(), SesameError> {
    debug!(key = %key, "running set action");

    let executor = super::build_executor()?;
    let output = executor
        .run(
            VaultAction::Set {
                key,
                value: SecretValue::new(value),
            },
            policy,
        )
        .await?;
    super::render(output)
}
