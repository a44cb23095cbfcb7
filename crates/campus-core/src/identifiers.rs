//! Core identifier types used across the Campus platform
//!
//! Uuid-backed newtypes so a principal id can never be confused with an
//! event id at a call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create from a UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the inner UUID
            pub fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

uuid_id!(
    /// Identifier of a persisted account
    PrincipalId,
    "principal"
);

uuid_id!(
    /// Identifier of a trackable event
    EventId,
    "event"
);

uuid_id!(
    /// Identifier of a student's registration for an event
    RegistrationId,
    "registration"
);

uuid_id!(
    /// Identifier of an append-only audit record
    AuditRecordId,
    "audit"
);
