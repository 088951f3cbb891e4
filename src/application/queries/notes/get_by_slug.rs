use super::NoteQueryService;
use crate::application::{
    dto::{AuthenticatedUser, NoteDto},
    error::ApplicationResult,
    ownership::load_owned_note,
};

pub struct GetNoteBySlugQuery {
    pub slug: String,
}

impl NoteQueryService {
    /// Author-only lookup; other users get the same not-found as a missing slug.
    pub async fn get_note_by_slug(
        &self,
        actor: &AuthenticatedUser,
        query: GetNoteBySlugQuery,
    ) -> ApplicationResult<NoteDto> {
        let note = load_owned_note(self.read_repo.as_ref(), actor, &query.slug).await?;
        Ok(note.into())
    }
}
