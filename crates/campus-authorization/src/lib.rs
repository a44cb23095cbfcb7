//! Campus Authorization - capability model and access decision gate
//!
//! Two small pieces sit between a verified credential and every privileged
//! handler:
//!
//! - the [`model`]: a static table from capability to the acting roles
//!   permitted to exercise it, and
//! - the [`gate`]: the decision procedure that applies the admin override
//!   first and the table second.
//!
//! The admin override is deliberate and non-negotiable: a credential whose
//! permanent role is admin is allowed everything, regardless of whatever
//! role it is currently acting as. Ownership checks ("a director may only
//! delete staff it created") are a second, handler-specific layer applied
//! after the gate allows, re-verified atomically at mutation time.

#![forbid(unsafe_code)]

/// Static capability table
pub mod model;

/// The access decision gate
pub mod gate;

pub use gate::{AccessGate, Decision, DenyReason};
pub use model::permitted;
