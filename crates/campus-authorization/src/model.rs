//! Static capability table
//!
//! Maps each operation category to the acting roles permitted to exercise
//! it. The table is consulted only for credentials whose permanent role is
//! not admin; the admin override in the gate precedes the lookup.

use campus_core::{Capability, Role};

/// Acting roles permitted to exercise a capability
pub fn permitted(capability: Capability) -> &'static [Role] {
    use Capability::*;
    use Role::*;
    match capability {
        // Admin surface
        SwitchRole | CreateDirector | UpdateDirector | DeleteDirector | ListUsers
        | ViewAuditLog => &[Admin],

        // Director surface
        CreateStaff | UpdateStaff | DeleteStaff | ListStaff | ManageEvents => &[Director],

        // Staff surface
        CreateStudent | UpdateStudent | DeleteStudent | ListStudents | ViewRegistrations
        | ManageTraining => &[Staff],

        // Shared surfaces
        CreateEvents | MutateAchievements => &[Staff, Director],
        ViewEvents => &[Staff, Director, Student],
        RegisterEvent => &[Student],
        ViewAchievements => &[Admin, Director, Staff, Student],
    }
}
