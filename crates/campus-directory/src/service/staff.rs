//! The staff surface: student management

use super::CampusService;
use crate::store::{NewPrincipal, UserSummary};
use campus_authentication::SessionClaims;
use campus_core::{CampusError, Capability, Principal, PrincipalId, Result, Role};
use campus_journal::{AuditAction, AuditEntry};

impl CampusService {
    /// Create a student account
    pub async fn create_student(
        &self,
        claims: &SessionClaims,
        username: &str,
        password: &str,
        department: &str,
        batch: &str,
    ) -> Result<Principal> {
        self.gate.require(claims, Capability::CreateStudent)?;
        Self::require_fields(&[
            ("username", username),
            ("password", password),
            ("department", department),
            ("batch", batch),
        ])?;

        let student = self
            .store
            .insert_principal(NewPrincipal {
                username: username.to_string(),
                password_hash: self.hasher.hash(password),
                role: Role::Student,
                department: Some(department.to_string()),
                batch: Some(batch.to_string()),
                created_by: Some(claims.principal),
            })
            .await?;

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Create,
            target_user_id: Some(student.id),
            target_role: Some(Role::Student),
            description: format!("Staff created student {username}"),
        });
        Ok(student)
    }

    /// Update a student's password and/or department
    pub async fn update_student(
        &self,
        claims: &SessionClaims,
        username: &str,
        new_password: Option<&str>,
        department: Option<&str>,
    ) -> Result<()> {
        self.gate.require(claims, Capability::UpdateStudent)?;
        Self::require_fields(&[("username", username)])?;

        if let Some(password) = new_password {
            let hash = self.hasher.hash(password);
            self.store
                .update_password(username, Role::Student, hash)
                .await?;
        }
        if let Some(department) = department {
            self.store
                .update_department(username, Role::Student, department.to_string())
                .await?;
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Update,
            target_user_id: None,
            target_role: Some(Role::Student),
            description: format!("Staff updated student {username}"),
        });
        Ok(())
    }

    /// All student accounts
    pub async fn list_students(&self, claims: &SessionClaims) -> Result<Vec<UserSummary>> {
        self.gate.require(claims, Capability::ListStudents)?;
        let students = self.store.list_by_role(Role::Student).await?;
        Ok(students.iter().map(UserSummary::from).collect())
    }

    /// Delete a student account this staff member created
    ///
    /// Same shape as the staff delete on the director surface: ownership
    /// is in the delete condition, failures are uniformly forbidden.
    pub async fn delete_student(&self, claims: &SessionClaims, id: PrincipalId) -> Result<()> {
        self.gate.require(claims, Capability::DeleteStudent)?;

        let deleted = self
            .store
            .delete_where(id, Role::Student, Some(claims.principal))
            .await?;
        if !deleted {
            return Err(CampusError::forbidden("Not allowed"));
        }

        self.audit.record(AuditEntry {
            actor_id: claims.principal,
            actor_role: claims.permanent,
            action: AuditAction::Delete,
            target_user_id: Some(id),
            target_role: Some(Role::Student),
            description: format!("Staff deleted student {id}"),
        });
        Ok(())
    }
}
