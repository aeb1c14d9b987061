//! Identity gate - interface to the verification subsystem
//!
//! Email verification and cookie sessions are owned by a separate service;
//! this crate only consumes two boolean questions from it. [`OpenGate`] is
//! the stand-in for deployments that run without verification.

use async_trait::async_trait;

/// Boolean gates the point service checks before accepting writes.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    /// Whether this identity has been banned.
    async fn is_banned(&self, identity: &str) -> bool;

    /// Whether this session token belongs to a verified identity.
    async fn is_verified_session(&self, token: &str) -> bool;
}

/// Permissive gate: nobody is banned, every session is verified.
pub struct OpenGate;

#[async_trait]
impl IdentityGate for OpenGate {
    async fn is_banned(&self, _identity: &str) -> bool {
        false
    }

    async fn is_verified_session(&self, _token: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_gate_is_permissive() {
        let gate = OpenGate;
        assert!(!gate.is_banned("anyone").await);
        assert!(gate.is_verified_session("any-token").await);
    }
}
