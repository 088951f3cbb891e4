use super::NoteQueryService;
use crate::application::{
    dto::{AuthenticatedUser, NoteListDto},
    error::ApplicationResult,
};

impl NoteQueryService {
    /// Every note the actor authored and nothing else.
    pub async fn list_notes(&self, actor: &AuthenticatedUser) -> ApplicationResult<NoteListDto> {
        let notes = self.read_repo.list_by_author(actor.id).await?;
        let items = notes
            .into_iter()
            .filter(|note| note.is_authored_by(actor.id))
            .map(Into::into)
            .collect();
        Ok(NoteListDto { items })
    }
}
