//! Campus Authentication - the identity token codec
//!
//! Sessions in Campus are stateless: a credential is a signed, expiring
//! assertion binding a principal to its permanent role and current acting
//! role. Nothing is persisted server-side and there is no revocation list;
//! compromise mitigation rests on short expiry.
//!
//! The codec is deliberately small:
//!
//! - [`SigningSecret`] is process-wide configuration, loaded once at
//!   startup and passed explicitly into [`TokenCodec`] so the codec is
//!   testable with injected keys.
//! - [`TokenCodec::mint`] signs a claims payload; it does not validate
//!   role legality. Legality lives in `campus_core::RoleContext`, which
//!   every caller must construct first.
//! - [`TokenCodec::verify`] rejects malformed structure, bad signatures,
//!   and expired tokens uniformly as [`AuthError::InvalidOrExpired`], so
//!   callers cannot be used as a validity oracle.

#![forbid(unsafe_code)]

/// Process-wide signing secret
pub mod secret;

/// Session claims and the mint/verify codec
pub mod token;

/// Bearer header parsing
pub mod bearer;

pub use bearer::bearer_token;
pub use secret::SigningSecret;
pub use token::{AuthError, SessionClaims, SessionToken, TokenCodec, LOGIN_TTL, SWITCH_TTL};
