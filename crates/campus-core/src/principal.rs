//! Persisted account records

use crate::identifiers::PrincipalId;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A persisted account
///
/// The permanent role is set once at creation and never changes through the
/// authorization subsystem. `created_by` is the ownership edge: the
/// principal that created this account, forming the admin → director →
/// staff → student delegation tree. It is `None` only for bootstrap
/// accounts (the initial admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique account identifier
    pub id: PrincipalId,

    /// Login name, unique across all accounts
    pub username: String,

    /// Opaque password hash; hashing itself is an external concern
    pub password_hash: String,

    /// Fixed trust tier
    pub role: Role,

    /// Department, set for students
    pub department: Option<String>,

    /// Batch/cohort, set for students
    pub batch: Option<String>,

    /// The principal that created this account
    pub created_by: Option<PrincipalId>,

    /// When the account was created
    pub created_at: OffsetDateTime,
}
