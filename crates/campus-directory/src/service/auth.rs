//! Login, credential verification, and profile lookup

use super::CampusService;
use crate::store::UserSummary;
use campus_authentication::{bearer_token, SessionClaims, SessionToken, LOGIN_TTL};
use campus_core::{CampusError, Result, RoleContext};
use time::OffsetDateTime;

impl CampusService {
    /// Authenticate a username and password, minting a login credential
    ///
    /// Unknown user and wrong password reject identically; neither is
    /// disclosed.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken> {
        Self::require_fields(&[("username", username), ("password", password)])?;

        let principal = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(CampusError::Unauthenticated)?;
        if !self.hasher.verify(password, &principal.password_hash) {
            return Err(CampusError::Unauthenticated);
        }

        let token = self.codec.mint(
            principal.id,
            RoleContext::of(principal.role),
            LOGIN_TTL,
            OffsetDateTime::now_utc(),
        )?;
        tracing::info!(principal = %principal.id, role = %principal.role, "login");
        Ok(token)
    }

    /// Verify the bearer credential carried in an authorization header
    ///
    /// Runs before any gate logic; a missing or malformed header never
    /// reaches the codec.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<SessionClaims> {
        let token = bearer_token(authorization)?;
        let claims = self.codec.verify(&token, OffsetDateTime::now_utc())?;
        Ok(claims)
    }

    /// The authenticated principal's own profile
    pub async fn me(&self, claims: &SessionClaims) -> Result<UserSummary> {
        let principal = self
            .store
            .find_by_id(claims.principal)
            .await?
            .ok_or_else(|| CampusError::not_found("profile not found"))?;
        Ok(UserSummary::from(&principal))
    }
}
