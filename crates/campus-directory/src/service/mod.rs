//! The operation handlers
//!
//! One service owns the seams: directory store, password hasher, token
//! codec, access gate, and the accountability recorder. Handler impls are
//! split by role surface, mirroring the deployment's route groups.

mod admin;
mod auth;
mod director;
mod staff;
mod student;

use crate::password::PasswordHasher;
use crate::store::DirectoryStore;
use campus_authentication::TokenCodec;
use campus_authorization::AccessGate;
use campus_core::{CampusError, Result};
use campus_journal::{AuditRecorder, AuditStore};
use std::sync::Arc;

/// The role-gated administrative backend
#[derive(Clone)]
pub struct CampusService {
    pub(crate) store: Arc<dyn DirectoryStore>,
    pub(crate) audit_store: Arc<dyn AuditStore>,
    pub(crate) audit: AuditRecorder,
    pub(crate) hasher: Arc<dyn PasswordHasher>,
    pub(crate) codec: TokenCodec,
    pub(crate) gate: AccessGate,
}

impl CampusService {
    /// Wire the service over its seams
    ///
    /// Spawns the audit worker, so a tokio runtime must be active.
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        audit_store: Arc<dyn AuditStore>,
        hasher: Arc<dyn PasswordHasher>,
        codec: TokenCodec,
    ) -> Self {
        let audit = AuditRecorder::spawn(audit_store.clone());
        Self {
            store,
            audit_store,
            audit,
            hasher,
            codec,
            gate: AccessGate::new(),
        }
    }

    /// Wait until every queued audit entry has been attempted
    ///
    /// For tests and graceful shutdown; handlers never wait on this.
    pub async fn flush_audit(&self) {
        self.audit.flush().await;
    }

    pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
        for (name, value) in fields {
            if value.is_empty() {
                return Err(CampusError::invalid(format!("{name} required")));
            }
        }
        Ok(())
    }
}