//! Audit record and filter types

use campus_core::{AuditRecordId, PrincipalId, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// The verb of a privileged mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// A privileged row was created
    Create,
    /// A privileged row was modified
    Update,
    /// A privileged row was removed
    Delete,
}

impl AuditAction {
    /// Persisted verb, uppercase
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a handler reports to the recorder
///
/// The recorder assigns the id and creation timestamp; handlers only
/// describe the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Who performed the mutation
    pub actor_id: PrincipalId,
    /// The actor's permanent role
    pub actor_role: Role,
    /// What kind of mutation
    pub action: AuditAction,
    /// The mutated principal, when known
    pub target_user_id: Option<PrincipalId>,
    /// The mutated principal's role
    pub target_role: Option<Role>,
    /// Human-readable description of the mutation
    pub description: String,
}

/// An immutable accountability fact
///
/// Field order matches the persisted schema: id, actor_id, actor_role,
/// action, target_user_id, target_role, description, created_at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Record identifier
    pub id: AuditRecordId,
    /// Who performed the mutation
    pub actor_id: PrincipalId,
    /// The actor's permanent role
    pub actor_role: Role,
    /// What kind of mutation
    pub action: AuditAction,
    /// The mutated principal, when known
    pub target_user_id: Option<PrincipalId>,
    /// The mutated principal's role
    pub target_role: Option<Role>,
    /// Human-readable description of the mutation
    pub description: String,
    /// When the record was written
    pub created_at: OffsetDateTime,
}

impl AuditRecord {
    /// Materialize an entry into a record at a point in time
    pub fn from_entry(entry: AuditEntry, created_at: OffsetDateTime) -> Self {
        Self {
            id: AuditRecordId::new(),
            actor_id: entry.actor_id,
            actor_role: entry.actor_role,
            action: entry.action,
            target_user_id: entry.target_user_id,
            target_role: entry.target_role,
            description: entry.description,
            created_at,
        }
    }
}

/// Query filter for the admin audit endpoints
///
/// `to` is inclusive and applied as end-of-day: a record written any time
/// on the `to` date matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditFilter {
    /// Restrict to records written by actors with this permanent role
    pub role: Option<Role>,
    /// Inclusive start date
    pub from: Option<Date>,
    /// Inclusive end date, applied as end-of-day
    pub to: Option<Date>,
}

impl AuditFilter {
    /// Whether a record passes the filter
    pub fn matches(&self, record: &AuditRecord) -> bool {
        if let Some(role) = self.role {
            if record.actor_role != role {
                return false;
            }
        }
        if let Some(from) = self.from {
            let start = PrimitiveDateTime::new(from, Time::MIDNIGHT).assume_utc();
            if record.created_at < start {
                return false;
            }
        }
        if let Some(to) = self.to {
            let end = PrimitiveDateTime::new(to, Time::MAX).assume_utc();
            if record.created_at > end {
                return false;
            }
        }
        true
    }
}
