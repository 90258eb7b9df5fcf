//! Terminal device-owner confirmation
//!
//! A `PresenceVerifier` for machines without a reachable biometric
//! stack: the user confirms presence interactively on the controlling
//! terminal. The prompt goes to stderr so stdout stays machine-parsable.

use sesame_core::error::GateError;
use sesame_core::gate::{
    OutcomeResponder, PresenceOutcome, PresencePolicy, PresenceRequest, PresenceVerifier,
};
use std::io::{self, BufRead, IsTerminal, Write};

/// Interactive terminal verifier
pub struct ConsoleVerifier;

impl ConsoleVerifier {
    /// Create a new terminal verifier
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleVerifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceVerifier for ConsoleVerifier {
    fn check_capability(&self, policy: PresencePolicy) -> Result<(), GateError> {
        if policy == PresencePolicy::BiometricOnly {
            return Err(GateError::Unsupported {
                reason: "no biometric hardware is reachable from this terminal; \
                         drop --biometric-only to confirm interactively"
                    .to_string(),
            });
        }

        if !io::stdin().is_terminal() {
            return Err(GateError::Unsupported {
                reason: "device-owner confirmation requires an interactive terminal".to_string(),
            });
        }

        Ok(())
    }

    fn begin(&self, request: PresenceRequest, responder: OutcomeResponder) {
        // Blocking prompt on a dedicated thread; begin must return
        // immediately so the gate can suspend on the outcome.
        std::thread::spawn(move || {
            let outcome = prompt(&request.reason).unwrap_or_else(|e| {
                PresenceOutcome::Unavailable(format!("terminal prompt failed: {}", e))
            });
            responder.fulfill(outcome);
        });
    }
}

/// Ask the user to confirm presence for `reason`
fn prompt(reason: &str) -> io::Result<PresenceOutcome> {
    let mut stderr = io::stderr();
    write!(stderr, "sesame wants to {}.\nConfirm presence? [y/N]: ", reason)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(PresenceOutcome::Granted),
        _ => Ok(PresenceOutcome::Denied(
            "confirmation declined at the terminal".to_string(),
        )),
    }
}
