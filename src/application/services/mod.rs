// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{notes::NoteCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{
            security::{PasswordHasher, TokenManager},
            session_revocation::SessionRevocationStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::notes::NoteQueryService,
    },
    domain::{
        note::{NoteReadRepository, NoteWriteRepository, services::NoteSlugService},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub note_commands: Arc<NoteCommandService>,
    pub note_queries: Arc<NoteQueryService>,
    token_manager: Arc<dyn TokenManager>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        note_write_repo: Arc<dyn NoteWriteRepository>,
        note_read_repo: Arc<dyn NoteReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&session_revocation_store),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(NoteSlugService::new(
            Arc::clone(&note_read_repo),
            Arc::clone(&slugger),
        ));

        let note_commands = Arc::new(NoteCommandService::new(
            Arc::clone(&note_write_repo),
            Arc::clone(&note_read_repo),
            Arc::clone(&slug_service),
        ));

        let note_queries = Arc::new(NoteQueryService::new(Arc::clone(&note_read_repo)));

        Self {
            user_commands,
            note_commands,
            note_queries,
            token_manager,
            session_revocation_store,
        }
    }

    /// Resolve a raw session token to its user, rejecting revoked sessions.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        self.ensure_session_not_revoked(&user).await?;
        Ok(user)
    }

    async fn ensure_session_not_revoked(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        let Some(session_id) = &user.session_id else {
            return Ok(());
        };

        if self.session_revocation_store.is_revoked(session_id).await? {
            return Err(ApplicationError::unauthorized("session revoked"));
        }

        Ok(())
    }
}
