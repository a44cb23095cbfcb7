//! The admin surface: role switching, director management, user listing

use super::CampusService;
use crate::store::{NewPrincipal, UserSummary};
use campus_authentication::{SessionClaims, SessionToken, SWITCH_TTL};
use campus_core::{
    CampusError, Capability, Principal, PrincipalId, Result, Role, RoleContext,
};
use campus_journal::{export_csv, AuditAction, AuditEntry, AuditFilter, AuditRecord};
use time::OffsetDateTime;

impl CampusService {
    /// Bootstrap the initial admin account
    ///
    /// Deployment setup, not a gated operation; the account has no
    /// ownership edge.
    pub async fn bootstrap_admin(&self, username: &str, password: &str) -> Result<Principal> {
        Self::require_fields(&[("username", username), ("password", password)])?;
        self.store
            .insert_principal(NewPrincipal {
                username: username.to_string(),
                password_hash: self.hasher.hash(password),
                role: Role::Admin,
                department: None,
                batch: None,
                created_by: None,
            })
            .await
    }

    /// Mint a credential acting as a lower tier
    ///
    /// Admin stays admin forever; only the acting role changes. The legal
    /// targets are admin, director, and staff; the student tier is never a
    /// delegation target.
    pub async fn switch_role(
        &self,
        claims: &SessionClaims,
        new_role: Role,
    ) -> Result<SessionToken> {
        self.gate.require(claims, Capability::SwitchRole)?;
        if new_role == Role::Student {
            return Err(CampusError::invalid("Invalid role"));
        }
        let ctx = RoleContext::new(claims.permanent, new_role)?;
        let token = self
            .codec
            .mint(claims.principal, ctx, SWITCH_TTL, OffsetDateTime::now_utc())?;
        tracing::info!(principal = %claims.principal, acting = %new_role, "role switch");
        Ok(token)
    }

    /// Create a director account
    pub async fn create_director(
        &self,
        claims: &SessionClaims,
        username: &str,
        password: &str,
    ) -> Result<Principal> {
        self.gate.require(claims, Capability::CreateDirector)?;
        Self::require_fields(&[("username", username), ("password", password)])?;

        let director = self
            .store
            .insert_principal(NewPrincipal {
                username: username.to_string(),
                password_hash: self.hasher.hash(password),
                role: Role::Director,
                department: None,
                batch: None,
                created_by: Some(claims.principal),
            })
            .await?;

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Create,
            target_user_id: Some(director.id),
            target_role: Some(Role::Director),
            description: format!("Admin created director {username}"),
        });
        Ok(director)
    }

    /// Update a director's password
    pub async fn update_director_password(
        &self,
        claims: &SessionClaims,
        username: &str,
        new_password: &str,
    ) -> Result<()> {
        self.gate.require(claims, Capability::UpdateDirector)?;
        Self::require_fields(&[("username", username), ("password", new_password)])?;

        let hash = self.hasher.hash(new_password);
        let updated = self
            .store
            .update_password(username, Role::Director, hash)
            .await?;
        if !updated {
            return Err(CampusError::not_found("Director not found"));
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Update,
            target_user_id: None,
            target_role: Some(Role::Director),
            description: format!("Admin updated director {username}"),
        });
        Ok(())
    }

    /// Delete a director account
    ///
    /// The admin surface reveals existence: a missing director is not
    /// found rather than forbidden.
    pub async fn delete_director(&self, claims: &SessionClaims, id: PrincipalId) -> Result<()> {
        self.gate.require(claims, Capability::DeleteDirector)?;

        let deleted = self.store.delete_where(id, Role::Director, None).await?;
        if !deleted {
            return Err(CampusError::not_found("Director not found"));
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Delete,
            target_user_id: Some(id),
            target_role: Some(Role::Director),
            description: format!("Admin deleted director {id}"),
        });
        Ok(())
    }

    /// List every account
    pub async fn list_users(&self, claims: &SessionClaims) -> Result<Vec<UserSummary>> {
        self.gate.require(claims, Capability::ListUsers)?;
        let all = self.store.list_all().await?;
        Ok(all.iter().map(UserSummary::from).collect())
    }

    /// Query the audit trail, newest-first
    pub async fn audit_log(
        &self,
        claims: &SessionClaims,
        filter: AuditFilter,
    ) -> Result<Vec<AuditRecord>> {
        self.gate.require(claims, Capability::ViewAuditLog)?;
        self.audit_store.query(filter).await
    }

    /// Export the audit trail as CSV with the fixed column order
    pub async fn export_audit_log(
        &self,
        claims: &SessionClaims,
        filter: AuditFilter,
    ) -> Result<String> {
        self.gate.require(claims, Capability::ViewAuditLog)?;
        let records = self.audit_store.query(filter).await?;
        Ok(export_csv(&records))
    }
}
