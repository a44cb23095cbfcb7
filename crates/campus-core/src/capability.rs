//! Operation categories gated by the capability model
//!
//! Each privileged operation surface names exactly one capability; the
//! mapping from capability to permitted acting roles lives in
//! `campus-authorization`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named operation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// Mint a credential with an acting role below admin
    SwitchRole,
    /// Create a director account
    CreateDirector,
    /// Update a director's password
    UpdateDirector,
    /// Delete a director account
    DeleteDirector,
    /// List every account
    ListUsers,
    /// Query or export the audit trail
    ViewAuditLog,
    /// Create a staff account
    CreateStaff,
    /// Update a staff member's password
    UpdateStaff,
    /// Delete a staff account
    DeleteStaff,
    /// List staff accounts
    ListStaff,
    /// Create a student account
    CreateStudent,
    /// Update a student's password or department
    UpdateStudent,
    /// Delete a student account
    DeleteStudent,
    /// List student accounts
    ListStudents,
    /// Create an event
    CreateEvents,
    /// Update or delete an event
    ManageEvents,
    /// Browse the event catalogue
    ViewEvents,
    /// Register for an event
    RegisterEvent,
    /// View event registrations
    ViewRegistrations,
    /// Create or edit training schedules
    ManageTraining,
    /// View achievements
    ViewAchievements,
    /// Create or edit achievements
    MutateAchievements,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::SwitchRole => "switch-role",
            Capability::CreateDirector => "create-director",
            Capability::UpdateDirector => "update-director",
            Capability::DeleteDirector => "delete-director",
            Capability::ListUsers => "list-users",
            Capability::ViewAuditLog => "view-audit-log",
            Capability::CreateStaff => "create-staff",
            Capability::UpdateStaff => "update-staff",
            Capability::DeleteStaff => "delete-staff",
            Capability::ListStaff => "list-staff",
            Capability::CreateStudent => "create-student",
            Capability::UpdateStudent => "update-student",
            Capability::DeleteStudent => "delete-student",
            Capability::ListStudents => "list-students",
            Capability::CreateEvents => "create-events",
            Capability::ManageEvents => "manage-events",
            Capability::ViewEvents => "view-events",
            Capability::RegisterEvent => "register-event",
            Capability::ViewRegistrations => "view-registrations",
            Capability::ManageTraining => "manage-training",
            Capability::ViewAchievements => "view-achievements",
            Capability::MutateAchievements => "mutate-achievements",
        };
        f.write_str(name)
    }
}

impl Capability {
    /// Every capability, for exhaustive property tests
    pub const ALL: [Capability; 22] = [
        Capability::SwitchRole,
        Capability::CreateDirector,
        Capability::UpdateDirector,
        Capability::DeleteDirector,
        Capability::ListUsers,
        Capability::ViewAuditLog,
        Capability::CreateStaff,
        Capability::UpdateStaff,
        Capability::DeleteStaff,
        Capability::ListStaff,
        Capability::CreateStudent,
        Capability::UpdateStudent,
        Capability::DeleteStudent,
        Capability::ListStudents,
        Capability::CreateEvents,
        Capability::ManageEvents,
        Capability::ViewEvents,
        Capability::RegisterEvent,
        Capability::ViewRegistrations,
        Capability::ManageTraining,
        Capability::ViewAchievements,
        Capability::MutateAchievements,
    ];
}
