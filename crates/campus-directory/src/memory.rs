//! In-memory directory
//!
//! Backs tests and single-process deployments. Everything lives behind one
//! `RwLock`, so each trait method is a single critical section and the
//! uniqueness rules hold under concurrent callers exactly as a relational
//! unique constraint would.

use crate::store::{DirectoryStore, Event, NewPrincipal};
use async_trait::async_trait;
use campus_core::{
    CampusError, EventId, Principal, PrincipalId, RegistrationId, Result, Role,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use time::OffsetDateTime;

#[derive(Default)]
struct Inner {
    principals: HashMap<PrincipalId, Principal>,
    events: HashMap<EventId, Event>,
    registrations: HashMap<RegistrationId, (PrincipalId, EventId)>,
}

/// In-memory implementation of the directory seam
#[derive(Default)]
pub struct MemoryDirectory {
    inner: RwLock<Inner>,
}

impl MemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectory {
    async fn insert_principal(&self, new: NewPrincipal) -> Result<Principal> {
        let mut inner = self.inner.write();
        if inner
            .principals
            .values()
            .any(|p| p.username == new.username)
        {
            return Err(CampusError::conflict("username already exists"));
        }
        let principal = Principal {
            id: PrincipalId::new(),
            username: new.username,
            password_hash: new.password_hash,
            role: new.role,
            department: new.department,
            batch: new.batch,
            created_by: new.created_by,
            created_at: OffsetDateTime::now_utc(),
        };
        inner.principals.insert(principal.id, principal.clone());
        Ok(principal)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Principal>> {
        let inner = self.inner.read();
        Ok(inner
            .principals
            .values()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: PrincipalId) -> Result<Option<Principal>> {
        Ok(self.inner.read().principals.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Principal>> {
        let inner = self.inner.read();
        let mut all: Vec<Principal> = inner.principals.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<Principal>> {
        let inner = self.inner.read();
        let mut matched: Vec<Principal> = inner
            .principals
            .values()
            .filter(|p| p.role == role)
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matched)
    }

    async fn list_created_by(&self, role: Role, creator: PrincipalId) -> Result<Vec<Principal>> {
        let inner = self.inner.read();
        let mut matched: Vec<Principal> = inner
            .principals
            .values()
            .filter(|p| p.role == role && p.created_by == Some(creator))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matched)
    }

    async fn update_password(
        &self,
        username: &str,
        role: Role,
        password_hash: String,
    ) -> Result<bool> {
        let mut inner = self.inner.write();
        match inner
            .principals
            .values_mut()
            .find(|p| p.username == username && p.role == role)
        {
            Some(principal) => {
                principal.password_hash = password_hash;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_department(
        &self,
        username: &str,
        role: Role,
        department: String,
    ) -> Result<bool> {
        let mut inner = self.inner.write();
        match inner
            .principals
            .values_mut()
            .find(|p| p.username == username && p.role == role)
        {
            Some(principal) => {
                principal.department = Some(department);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_where(
        &self,
        id: PrincipalId,
        role: Role,
        owner: Option<PrincipalId>,
    ) -> Result<bool> {
        let mut inner = self.inner.write();
        let matches = inner
            .principals
            .get(&id)
            .map(|p| p.role == role && owner.map_or(true, |o| p.created_by == Some(o)))
            .unwrap_or(false);
        if matches {
            inner.principals.remove(&id);
        }
        Ok(matches)
    }

    async fn insert_event(
        &self,
        title: String,
        created_by: PrincipalId,
        creator_role: Role,
    ) -> Result<Event> {
        let mut inner = self.inner.write();
        let event = Event {
            id: EventId::new(),
            title,
            created_by,
            creator_role,
        };
        inner.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.inner.read().events.values().cloned().collect())
    }

    async fn insert_registration(
        &self,
        student: PrincipalId,
        event: EventId,
    ) -> Result<RegistrationId> {
        let mut inner = self.inner.write();
        if !inner.events.contains_key(&event) {
            return Err(CampusError::not_found("event does not exist"));
        }
        if inner
            .registrations
            .values()
            .any(|(s, e)| *s == student && *e == event)
        {
            return Err(CampusError::conflict("already registered"));
        }
        let id = RegistrationId::new();
        inner.registrations.insert(id, (student, event));
        Ok(id)
    }
}
