//! Authorization gate
//!
//! Wraps a single user-presence check around a batch of vault
//! operations. The state machine is explicit (Idle -> Pending -> Idle)
//! and each request resolves to exactly one outcome, delivered through
//! a one-shot channel so double delivery is unrepresentable.

use crate::error::GateError;
use std::sync::Mutex;
use tokio::sync::oneshot;
use tracing::debug;

/// Which authentication mechanisms satisfy the presence check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresencePolicy {
    /// Biometric hardware only
    BiometricOnly,

    /// Biometric hardware, falling back to another device-owner proof
    #[default]
    BiometricOrFallback,
}

/// A single presence-check request shown to the user
#[derive(Debug, Clone)]
pub struct PresenceRequest {
    /// Human-readable reason displayed by the verifier
    pub reason: String,

    /// Mechanisms acceptable for this request
    pub policy: PresencePolicy,
}

/// Terminal outcome of a presence check
///
/// Denied and Unavailable carry the provider's reason verbatim; the
/// gate never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceOutcome {
    Granted,
    Denied(String),
    Unavailable(String),
}

/// Single-use handle for delivering a presence outcome
///
/// `fulfill` consumes the responder. Dropping it without fulfilling
/// surfaces as `GateError::OutcomeLost` on the waiting side.
pub struct OutcomeResponder(oneshot::Sender<PresenceOutcome>);

impl OutcomeResponder {
    /// Deliver the outcome to the waiting gate
    pub fn fulfill(self, outcome: PresenceOutcome) {
        // The receiver disappears only if the waiting task was aborted.
        let _ = self.0.send(outcome);
    }
}

/// External collaborator performing the actual user-presence check
pub trait PresenceVerifier: Send + Sync {
    /// Synchronous structural pre-check: is this policy satisfiable at
    /// all on this device?
    ///
    /// Distinct from the asynchronous outcome: failing here means the
    /// request never starts.
    fn check_capability(&self, policy: PresencePolicy) -> Result<(), GateError>;

    /// Start the asynchronous check; must not block
    ///
    /// The verifier owns eventual resolution: it fulfills the responder
    /// with exactly one outcome, however long the user takes.
    fn begin(&self, request: PresenceRequest, responder: OutcomeResponder);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Idle,
    Pending,
}

/// Authorization gate enforcing at most one in-flight presence check
pub struct AuthorizationGate<V: PresenceVerifier> {
    verifier: V,
    state: Mutex<GateState>,
}

impl<V: PresenceVerifier> AuthorizationGate<V> {
    /// Create a gate in the Idle state
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            state: Mutex::new(GateState::Idle),
        }
    }

    /// Run one presence check and suspend until its outcome arrives
    ///
    /// # Errors
    ///
    /// - `GateError::Busy` when a request is already pending; the
    ///   pending request and its eventual outcome are unaffected.
    /// - `GateError::Unsupported` when the verifier's structural
    ///   pre-check rejects the policy; no state transition happens.
    /// - `GateError::OutcomeLost` when the verifier drops the request
    ///   without answering.
    pub async fn authorize(
        &self,
        reason: &str,
        policy: PresencePolicy,
    ) -> Result<PresenceOutcome, GateError> {
        let receiver = {
            let mut state = self.state.lock().unwrap();
            if *state == GateState::Pending {
                return Err(GateError::Busy);
            }
            self.verifier.check_capability(policy)?;

            let (sender, receiver) = oneshot::channel();
            *state = GateState::Pending;
            debug!(reason, "presence check started");
            self.verifier.begin(
                PresenceRequest {
                    reason: reason.to_string(),
                    policy,
                },
                OutcomeResponder(sender),
            );
            receiver
        };

        // The only suspension point: exactly one outcome, eventually.
        let outcome = receiver.await;
        *self.state.lock().unwrap() = GateState::Idle;

        match outcome {
            Ok(outcome) => {
                debug!(?outcome, "presence check resolved");
                Ok(outcome)
            }
            Err(_) => Err(GateError::OutcomeLost),
        }
    }
}
