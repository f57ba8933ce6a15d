//! Identity gates.
//!
//! The patient OTP check and the admin passkey are access-control stubs, not a
//! security system. The trait keeps them pluggable so a real verifier can
//! replace the shared-secret stub without touching the lifecycle or the store.

use crate::constants::DEV_SHARED_SECRET;

/// A pass/fail credential check consumed by the intake and admin flows.
pub trait CredentialVerifier {
    /// Returns `true` when the supplied credential is accepted.
    fn verify(&self, credential: &str) -> bool;
}

/// Trivial verifier comparing against a fixed shared secret.
pub struct SharedSecretGate {
    secret: String,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for SharedSecretGate {
    /// The development gate, accepting the fixed six-digit secret.
    fn default() -> Self {
        Self::new(DEV_SHARED_SECRET)
    }
}

impl CredentialVerifier for SharedSecretGate {
    fn verify(&self, credential: &str) -> bool {
        credential == self.secret
    }
}
