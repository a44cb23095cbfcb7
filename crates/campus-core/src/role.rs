//! The four-tier role model
//!
//! Trust in Campus is a fixed hierarchy: admin creates directors, directors
//! create staff, staff create students. A credential carries two role
//! fields: the permanent role set at account creation, and the acting role
//! the session currently operates as. Only admin may act as a lower tier;
//! everyone else always acts as themselves.

use crate::errors::{CampusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A principal's trust tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Absolute authority; may impersonate director or staff
    Admin,
    /// Manages staff and events
    Director,
    /// Manages students, registrations, and training
    Staff,
    /// Registers for events; never switches roles
    Student,
}

impl Role {
    /// All roles, highest trust first
    pub const ALL: [Role; 4] = [Role::Admin, Role::Director, Role::Staff, Role::Student];

    /// Stable lowercase name, as persisted in storage and audit records
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Director => "director",
            Role::Staff => "staff",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "director" => Ok(Role::Director),
            "staff" => Ok(Role::Staff),
            "student" => Ok(Role::Student),
            other => Err(CampusError::invalid(format!("unknown role: {other}"))),
        }
    }
}

/// A validated permanent/acting role pair
///
/// The legality rule lives here and nowhere else: a pair can only be
/// constructed through [`RoleContext::new`], so any context handed to the
/// token codec or the access gate is legal by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleContext {
    permanent: Role,
    acting: Role,
}

impl RoleContext {
    /// Build a role context, enforcing the impersonation rule
    ///
    /// Admin may act as admin, director, or staff. Every other permanent
    /// role must act as itself. Admin acting as student is rejected; the
    /// student tier is never a delegation target.
    pub fn new(permanent: Role, acting: Role) -> Result<Self> {
        let legal = match permanent {
            Role::Admin => matches!(acting, Role::Admin | Role::Director | Role::Staff),
            _ => acting == permanent,
        };
        if !legal {
            return Err(CampusError::invalid(format!(
                "role {permanent} cannot act as {acting}"
            )));
        }
        Ok(Self { permanent, acting })
    }

    /// A context acting as its own permanent role, as minted at login
    pub fn of(role: Role) -> Self {
        Self {
            permanent: role,
            acting: role,
        }
    }

    /// The fixed trust tier set at account creation
    pub fn permanent(&self) -> Role {
        self.permanent
    }

    /// The tier this session currently operates as
    pub fn acting(&self) -> Role {
        self.acting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_may_act_as_lower_tiers() {
        for acting in [Role::Admin, Role::Director, Role::Staff] {
            let ctx = RoleContext::new(Role::Admin, acting).expect("legal pair");
            assert_eq!(ctx.permanent(), Role::Admin);
            assert_eq!(ctx.acting(), acting);
        }
    }

    #[test]
    fn admin_may_not_act_as_student() {
        assert!(RoleContext::new(Role::Admin, Role::Student).is_err());
    }

    #[test]
    fn non_admin_only_acts_as_itself() {
        for permanent in [Role::Director, Role::Staff, Role::Student] {
            assert!(RoleContext::new(permanent, permanent).is_ok());
            for acting in Role::ALL {
                if acting != permanent {
                    assert!(RoleContext::new(permanent, acting).is_err());
                }
            }
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Role::Director).expect("serialize");
        assert_eq!(json, "\"director\"");
        let role: Role = serde_json::from_str("\"staff\"").expect("deserialize");
        assert_eq!(role, Role::Staff);
    }

    #[test]
    fn role_parses_from_persisted_name() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().expect("parse"), role);
        }
        assert!("professor".parse::<Role>().is_err());
    }
}
