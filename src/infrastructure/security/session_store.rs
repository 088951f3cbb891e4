// src/infrastructure/security/session_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::session_revocation::SessionRevocationStore;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Process-local set of logged-out session ids. Cleared on restart, which
/// only matters until the tokens it guards expire.
#[derive(Default)]
pub struct InMemorySessionRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

impl InMemorySessionRevocationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn revoked(&self) -> ApplicationResult<MutexGuard<'_, HashSet<String>>> {
        self.revoked
            .lock()
            .map_err(|_| ApplicationError::infrastructure("session store lock poisoned"))
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRevocationStore {
    async fn is_revoked(&self, session_id: &str) -> ApplicationResult<bool> {
        Ok(self.revoked()?.contains(session_id))
    }

    async fn revoke(&self, session_id: &str) -> ApplicationResult<()> {
        self.revoked()?.insert(session_id.to_string());
        Ok(())
    }
}
