//! Campus Journal - the accountability recorder
//!
//! Every privileged mutation of a director, staff, or student account
//! leaves exactly one immutable [`AuditRecord`]. Records are append-only:
//! the [`store::AuditStore`] trait has no update or delete surface at all.
//!
//! Recording is best-effort by design. The primary operation's response
//! outranks strict audit completeness: an append failure is logged through
//! `tracing` and swallowed, and the [`recorder::AuditRecorder`] hands
//! entries to a dedicated worker task so the failure mode is structurally
//! incapable of touching the primary response path.

#![forbid(unsafe_code)]

/// Audit record and filter types
pub mod record;

/// Append-only store trait and in-memory implementation
pub mod store;

/// Fire-and-forget recorder over a store
pub mod recorder;

/// Flat tabular export
pub mod export;

pub use export::export_csv;
pub use record::{AuditAction, AuditEntry, AuditFilter, AuditRecord};
pub use recorder::AuditRecorder;
pub use store::{AuditStore, MemoryAuditStore};
