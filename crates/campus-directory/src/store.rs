//! Directory storage seam
//!
//! The trait is the boundary to the relational backend. Consistency rules
//! live on the storage side of the seam: username uniqueness, duplicate
//! registration, and the conditional deletes used for ownership scoping
//! are all resolved inside a single storage operation.

use async_trait::async_trait;
use campus_core::{EventId, Principal, PrincipalId, RegistrationId, Result, Role};
use serde::{Deserialize, Serialize};

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct NewPrincipal {
    /// Login name, unique across all accounts
    pub username: String,
    /// Already-hashed password
    pub password_hash: String,
    /// Permanent role, fixed for the account's lifetime
    pub role: Role,
    /// Department, for students
    pub department: Option<String>,
    /// Batch/cohort, for students
    pub batch: Option<String>,
    /// Ownership edge to the creating principal
    pub created_by: Option<PrincipalId>,
}

/// Account listing row, never carrying the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Account identifier
    pub id: PrincipalId,
    /// Login name
    pub username: String,
    /// Permanent role
    pub role: Role,
    /// Department, for students
    pub department: Option<String>,
    /// Batch/cohort, for students
    pub batch: Option<String>,
}

impl From<&Principal> for UserSummary {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            username: principal.username.clone(),
            role: principal.role,
            department: principal.department.clone(),
            batch: principal.batch.clone(),
        }
    }
}

/// A trackable event, minimal surface for the registration path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier
    pub id: EventId,
    /// Event title
    pub title: String,
    /// The principal that created the event
    pub created_by: PrincipalId,
    /// The creator's permanent role at creation time
    pub creator_role: Role,
}

/// The relational backend behind the privileged handlers
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Insert an account; duplicate username is a conflict
    async fn insert_principal(&self, new: NewPrincipal) -> Result<Principal>;

    /// Look up an account by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<Principal>>;

    /// Look up an account by id
    async fn find_by_id(&self, id: PrincipalId) -> Result<Option<Principal>>;

    /// All accounts, any role
    async fn list_all(&self) -> Result<Vec<Principal>>;

    /// Accounts with a permanent role
    async fn list_by_role(&self, role: Role) -> Result<Vec<Principal>>;

    /// Accounts with a permanent role created by a specific principal
    async fn list_created_by(&self, role: Role, creator: PrincipalId) -> Result<Vec<Principal>>;

    /// Set the password hash of the account matching username and role
    ///
    /// Returns false when no such row exists.
    async fn update_password(&self, username: &str, role: Role, password_hash: String)
        -> Result<bool>;

    /// Set the department of the account matching username and role
    ///
    /// Returns false when no such row exists.
    async fn update_department(&self, username: &str, role: Role, department: String)
        -> Result<bool>;

    /// Delete the account matching id, role, and (when given) owner
    ///
    /// The conditions are applied in one atomic step, so ownership is
    /// verified at mutation time rather than through a prior read.
    /// Returns false when no row matched.
    async fn delete_where(
        &self,
        id: PrincipalId,
        role: Role,
        owner: Option<PrincipalId>,
    ) -> Result<bool>;

    /// Insert an event
    async fn insert_event(&self, title: String, created_by: PrincipalId, creator_role: Role)
        -> Result<Event>;

    /// All events
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Register a student for an event
    ///
    /// A missing event is not found; a duplicate (student, event) pair is
    /// a conflict, resolved atomically against concurrent attempts.
    async fn insert_registration(
        &self,
        student: PrincipalId,
        event: EventId,
    ) -> Result<RegistrationId>;
}
