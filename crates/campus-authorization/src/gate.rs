//! The access decision gate
//!
//! `authorize` combines the admin override with the capability table. It
//! runs before any side-effecting handler logic; a deny short-circuits the
//! request with no partial execution and no audit write.

use crate::model::permitted;
use campus_authentication::{AuthError, SessionClaims, SessionToken, TokenCodec};
use campus_core::{CampusError, Capability, Role};
use time::OffsetDateTime;

/// Outcome of an access decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The operation may proceed
    Allow,
    /// The operation must be refused with no state change
    Deny(DenyReason),
}

/// Why an operation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Missing, invalid, or expired credential
    Unauthenticated,
    /// Valid credential, insufficient acting-role capability
    Forbidden,
}

/// Per-request access decision procedure
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Create a gate
    pub fn new() -> Self {
        Self
    }

    /// Decide whether verified claims may exercise a capability
    ///
    /// Admin's permanent role bypasses the table entirely; otherwise the
    /// acting role must be in the capability's permitted set.
    pub fn authorize(&self, claims: &SessionClaims, capability: Capability) -> Decision {
        if claims.permanent == Role::Admin {
            return Decision::Allow;
        }
        if permitted(capability).contains(&claims.acting) {
            Decision::Allow
        } else {
            tracing::debug!(
                principal = %claims.principal,
                acting = %claims.acting,
                %capability,
                "access denied"
            );
            Decision::Deny(DenyReason::Forbidden)
        }
    }

    /// Verify a raw token and authorize it in one step
    ///
    /// Codec failure maps to `Deny(Unauthenticated)`; the claims are
    /// returned alongside `Allow` so handlers act on verified identity.
    pub fn authorize_token(
        &self,
        codec: &TokenCodec,
        token: &SessionToken,
        now: OffsetDateTime,
        capability: Capability,
    ) -> Result<SessionClaims, DenyReason> {
        let claims = codec
            .verify(token, now)
            .map_err(|AuthError::InvalidOrExpired| DenyReason::Unauthenticated)?;
        match self.authorize(&claims, capability) {
            Decision::Allow => Ok(claims),
            Decision::Deny(reason) => Err(reason),
        }
    }

    /// Authorize or return the client-visible error
    pub fn require(
        &self,
        claims: &SessionClaims,
        capability: Capability,
    ) -> Result<(), CampusError> {
        match self.authorize(claims, capability) {
            Decision::Allow => Ok(()),
            Decision::Deny(DenyReason::Unauthenticated) => Err(CampusError::Unauthenticated),
            Decision::Deny(DenyReason::Forbidden) => Err(CampusError::forbidden(format!(
                "{} requires one of {:?}",
                capability,
                permitted(capability)
            ))),
        }
    }
}
