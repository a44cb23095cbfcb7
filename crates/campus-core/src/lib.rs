//! Campus Core - shared foundation for the authorization subsystem
//!
//! This crate provides the types every other Campus crate builds on: the
//! four-tier role model with its permanent/acting split, the capability
//! categories gated by the authorization layer, identifier newtypes, the
//! persisted `Principal` account record, and the unified `CampusError`.
//!
//! It contains no I/O and no policy decisions; legality of a
//! permanent/acting role pair is the one rule enforced here, at
//! [`RoleContext`] construction time, so downstream crates never see an
//! illegal pair.

#![forbid(unsafe_code)]

/// Identifier newtypes for principals, events, and registrations
pub mod identifiers;

/// The four-tier role model and the permanent/acting role pair
pub mod role;

/// Operation categories gated by the capability model
pub mod capability;

/// Persisted account records
pub mod principal;

/// Unified error handling
pub mod errors;

pub use capability::Capability;
pub use errors::{CampusError, Result};
pub use identifiers::{AuditRecordId, EventId, PrincipalId, RegistrationId};
pub use principal::Principal;
pub use role::{Role, RoleContext};
