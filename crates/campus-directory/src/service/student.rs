//! The student surface: browsing and registering for events

use super::CampusService;
use crate::store::Event;
use campus_authentication::SessionClaims;
use campus_core::{Capability, EventId, RegistrationId, Result};

impl CampusService {
    /// Browse the event catalogue
    pub async fn list_events(&self, claims: &SessionClaims) -> Result<Vec<Event>> {
        self.gate.require(claims, Capability::ViewEvents)?;
        self.store.list_events().await
    }

    /// Register the authenticated student for an event
    ///
    /// Duplicate registration is resolved by the store's uniqueness rule;
    /// under concurrent attempts exactly one registration persists and the
    /// loser sees a conflict.
    pub async fn register_event(
        &self,
        claims: &SessionClaims,
        event: EventId,
    ) -> Result<RegistrationId> {
        self.gate.require(claims, Capability::RegisterEvent)?;
        self.store
            .insert_registration(claims.principal, event)
            .await
    }
}
