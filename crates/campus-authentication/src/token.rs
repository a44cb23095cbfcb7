//! Session claims and the mint/verify codec
//!
//! Wire form: `base64url(json claims) "." base64url(hmac-sha256 tag)`,
//! tag computed over the encoded payload. Verification failures are
//! collapsed into a single error kind so the codec cannot be probed for
//! whether a token was malformed, forged, or merely expired.

use crate::secret::SigningSecret;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use campus_core::{CampusError, PrincipalId, Role, RoleContext};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use time::{Duration, OffsetDateTime};

type HmacSha256 = Hmac<Sha256>;

/// Lifetime of a credential minted at login
pub const LOGIN_TTL: Duration = Duration::days(1);

/// Lifetime of a credential minted at role switch
///
/// Matches [`LOGIN_TTL`] in the observed behavior. An elevated acting
/// session arguably warrants a shorter lifetime; kept equal pending a
/// product decision.
pub const SWITCH_TTL: Duration = Duration::days(1);

/// Token verification failure
///
/// Deliberately a single external kind: bad signature, malformed
/// structure, and past expiry are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The token is not a currently valid credential
    #[error("invalid or expired token")]
    InvalidOrExpired,
}

impl From<AuthError> for CampusError {
    fn from(_: AuthError) -> Self {
        CampusError::Unauthenticated
    }
}

/// The verified content of a session credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The authenticated principal
    pub principal: PrincipalId,

    /// Fixed trust tier
    pub permanent: Role,

    /// Tier the session operates as
    pub acting: Role,

    /// Expiry, unix seconds
    pub expires_at: i64,
}

impl SessionClaims {
    /// The permanent/acting pair as a validated context
    ///
    /// Claims only exist post-verification, and every minted token went
    /// through a [`RoleContext`]; a failure here means a token was signed
    /// with an illegal pair and must be treated as unauthenticated.
    pub fn role_context(&self) -> Result<RoleContext, AuthError> {
        RoleContext::new(self.permanent, self.acting).map_err(|_| AuthError::InvalidOrExpired)
    }
}

/// An opaque signed session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    /// The wire form carried in the authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Mints and verifies session tokens with an injected secret
#[derive(Clone)]
pub struct TokenCodec {
    secret: SigningSecret,
}

impl TokenCodec {
    /// Create a codec over a process-wide secret
    pub fn new(secret: SigningSecret) -> Self {
        Self { secret }
    }

    /// Mint a signed credential for a principal
    ///
    /// Role legality is not checked here; `ctx` is legal by construction.
    pub fn mint(
        &self,
        principal: PrincipalId,
        ctx: RoleContext,
        ttl: Duration,
        now: OffsetDateTime,
    ) -> Result<SessionToken, AuthError> {
        let claims = SessionClaims {
            principal,
            permanent: ctx.permanent(),
            acting: ctx.acting(),
            expires_at: (now + ttl).unix_timestamp(),
        };
        let payload = serde_json::to_vec(&claims).map_err(|_| AuthError::InvalidOrExpired)?;
        let encoded = URL_SAFE_NO_PAD.encode(&payload);
        let tag = self.sign(encoded.as_bytes());
        Ok(SessionToken(format!(
            "{encoded}.{}",
            URL_SAFE_NO_PAD.encode(tag)
        )))
    }

    /// Verify a token and return its claims
    ///
    /// Rejects malformed structure, signature mismatch, and expiry
    /// uniformly as [`AuthError::InvalidOrExpired`].
    pub fn verify(
        &self,
        token: &SessionToken,
        now: OffsetDateTime,
    ) -> Result<SessionClaims, AuthError> {
        let (encoded, tag_part) = token
            .0
            .split_once('.')
            .ok_or(AuthError::InvalidOrExpired)?;
        let presented_tag = URL_SAFE_NO_PAD
            .decode(tag_part)
            .map_err(|_| AuthError::InvalidOrExpired)?;

        let expected_tag = self.sign(encoded.as_bytes());
        if presented_tag.ct_eq(&expected_tag).unwrap_u8() != 1 {
            return Err(AuthError::InvalidOrExpired);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| AuthError::InvalidOrExpired)?;
        let claims: SessionClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidOrExpired)?;

        if claims.expires_at <= now.unix_timestamp() {
            return Err(AuthError::InvalidOrExpired);
        }
        // Reject tokens signed with an illegal pair outright
        claims.role_context()?;
        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(data);
        mac.finalize().into_bytes().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use campus_core::Role;

    fn codec() -> TokenCodec {
        TokenCodec::new(SigningSecret::from_bytes([7u8; 32]))
    }

    fn now() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("valid timestamp")
    }

    #[test]
    fn mint_then_verify_round_trips_claims() {
        let codec = codec();
        let principal = PrincipalId::new();
        let ctx = RoleContext::new(Role::Admin, Role::Staff).expect("legal pair");

        let token = codec
            .mint(principal, ctx, LOGIN_TTL, now())
            .expect("mint succeeds");
        let claims = codec.verify(&token, now()).expect("verifies");

        assert_eq!(claims.principal, principal);
        assert_eq!(claims.permanent, Role::Admin);
        assert_eq!(claims.acting, Role::Staff);
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = codec();
        let token = codec
            .mint(
                PrincipalId::new(),
                RoleContext::of(Role::Director),
                Duration::hours(1),
                now(),
            )
            .expect("mint succeeds");

        assert_matches!(
            codec.verify(&token, now() + Duration::hours(2)),
            Err(AuthError::InvalidOrExpired)
        );
    }

    #[test]
    fn corrupted_signature_and_expiry_are_indistinguishable() {
        let codec = codec();
        let token = codec
            .mint(
                PrincipalId::new(),
                RoleContext::of(Role::Staff),
                Duration::hours(1),
                now(),
            )
            .expect("mint succeeds");

        let mut corrupted = token.as_str().to_string();
        let flipped = if corrupted.ends_with('A') { 'B' } else { 'A' };
        corrupted.pop();
        corrupted.push(flipped);
        let corrupted = SessionToken::from(corrupted.as_str());

        let expired = codec.verify(&token, now() + Duration::hours(2));
        let forged = codec.verify(&corrupted, now());
        assert_eq!(expired, forged);
        assert_matches!(forged, Err(AuthError::InvalidOrExpired));
    }

    #[test]
    fn other_key_does_not_verify() {
        let minted = codec()
            .mint(
                PrincipalId::new(),
                RoleContext::of(Role::Admin),
                LOGIN_TTL,
                now(),
            )
            .expect("mint succeeds");
        let other = TokenCodec::new(SigningSecret::from_bytes([8u8; 32]));
        assert!(other.verify(&minted, now()).is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let codec = codec();
        for garbage in ["", "no-dot-here", "a.b.c", "!!.!!", "YWJj."] {
            assert_matches!(
                codec.verify(&SessionToken::from(garbage), now()),
                Err(AuthError::InvalidOrExpired)
            );
        }
    }
}
