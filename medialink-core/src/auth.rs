//! Credential verification
//!
//! The dashboard and creation surface are gated by a single shared secret
//! carried in a session cookie. Verification is behind a trait so a
//! deployment can swap in a different credential scheme without touching
//! the HTTP layer.

use subtle::ConstantTimeEq;

pub trait CredentialVerifier: Send + Sync {
    /// Check a presented credential (cookie value or login form field).
    fn verify(&self, presented: &str) -> bool;
}

/// Verifier backed by one global shared secret.
pub struct SharedSecretVerifier {
    secret: String,
}

impl SharedSecretVerifier {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialVerifier for SharedSecretVerifier {
    fn verify(&self, presented: &str) -> bool {
        // Constant-time comparison; an empty secret never authenticates.
        !self.secret.is_empty()
            && bool::from(self.secret.as_bytes().ct_eq(presented.as_bytes()))
    }
}
