use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revoke the actor's session so its token stops authenticating.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &actor.session_id {
            self.revoked_sessions.revoke(session_id).await?;
        }
        tracing::info!(user_id = %actor.id, "user logged out");
        Ok(())
    }
}
