//! The director surface: staff management and events

use super::CampusService;
use crate::store::{Event, NewPrincipal, UserSummary};
use campus_authentication::SessionClaims;
use campus_core::{CampusError, Capability, Principal, PrincipalId, Result, Role};
use campus_journal::{AuditAction, AuditEntry};

impl CampusService {
    /// Create a staff account
    pub async fn create_staff(
        &self,
        claims: &SessionClaims,
        username: &str,
        password: &str,
    ) -> Result<Principal> {
        self.gate.require(claims, Capability::CreateStaff)?;
        Self::require_fields(&[("username", username), ("password", password)])?;

        let staff = self
            .store
            .insert_principal(NewPrincipal {
                username: username.to_string(),
                password_hash: self.hasher.hash(password),
                role: Role::Staff,
                department: None,
                batch: None,
                created_by: Some(claims.principal),
            })
            .await?;

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Create,
            target_user_id: Some(staff.id),
            target_role: Some(Role::Staff),
            description: format!("Director created staff {username}"),
        });
        Ok(staff)
    }

    /// Update a staff member's password
    pub async fn update_staff_password(
        &self,
        claims: &SessionClaims,
        username: &str,
        new_password: &str,
    ) -> Result<()> {
        self.gate.require(claims, Capability::UpdateStaff)?;
        Self::require_fields(&[("username", username), ("password", new_password)])?;

        let hash = self.hasher.hash(new_password);
        let updated = self
            .store
            .update_password(username, Role::Staff, hash)
            .await?;
        if !updated {
            return Err(CampusError::not_found("Staff not found"));
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Update,
            target_user_id: None,
            target_role: Some(Role::Staff),
            description: format!("Director updated staff {username}"),
        });
        Ok(())
    }

    /// Staff accounts this director created
    pub async fn list_staff(&self, claims: &SessionClaims) -> Result<Vec<UserSummary>> {
        self.gate.require(claims, Capability::ListStaff)?;
        let staff = self
            .store
            .list_created_by(Role::Staff, claims.principal)
            .await?;
        Ok(staff.iter().map(UserSummary::from).collect())
    }

    /// Delete a staff account this director created
    ///
    /// Ownership is part of the delete condition itself: "wrong role" and
    /// "not owned" are indistinguishable, both forbidden, so the path
    /// leaks no existence information.
    pub async fn delete_staff(&self, claims: &SessionClaims, id: PrincipalId) -> Result<()> {
        self.gate.require(claims, Capability::DeleteStaff)?;

        let deleted = self
            .store
            .delete_where(id, Role::Staff, Some(claims.principal))
            .await?;
        if !deleted {
            return Err(CampusError::forbidden("Not allowed"));
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Delete,
            target_user_id: Some(id),
            target_role: Some(Role::Staff),
            description: format!("Director deleted staff {id}"),
        });
        Ok(())
    }

    /// Create an event
    ///
    /// Event mutations are business state outside the accountability
    /// contract; they are gated but not audited.
    pub async fn create_event(&self, claims: &SessionClaims, title: &str) -> Result<Event> {
        self.gate.require(claims, Capability::CreateEvents)?;
        Self::require_fields(&[("title", title)])?;
        self.store
            .insert_event(title.to_string(), claims.principal, claims.permanent)
            .await
    }
}
