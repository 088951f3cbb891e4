use std::sync::Arc;

use uuid::Uuid;

use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::ApplicationResult,
    ports::{
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

/// Account use cases: signup, login and logout.
pub struct UserCommandService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
    tokens: Arc<dyn TokenManager>,
    pub(super) revoked_sessions: Arc<dyn SessionRevocationStore>,
}

impl UserCommandService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenManager>,
        revoked_sessions: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            hasher,
            clock,
            tokens,
            revoked_sessions,
        }
    }

    /// Every session gets a fresh id so logout can revoke it alone.
    pub(super) async fn start_session(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            session_id: Some(Uuid::new_v4().to_string()),
        };
        self.tokens.issue(subject).await
    }
}
