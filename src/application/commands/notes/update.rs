// src/application/commands/notes/update.rs
use super::{
    NoteCommandService,
    form::{ValidatedNote, map_slug_conflict},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, NoteDto},
        error::ApplicationResult,
        ownership::load_owned_note,
    },
    domain::note::NoteUpdate,
};

pub struct UpdateNoteCommand {
    /// Slug the note is currently addressed by.
    pub current_slug: String,
    pub title: String,
    pub text: String,
    pub slug: Option<String>,
}

impl NoteCommandService {
    pub async fn update_note(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let mut note =
            load_owned_note(self.read_repo.as_ref(), actor, &command.current_slug).await?;

        let ValidatedNote { title, text, slug } = self
            .validate_form(command.title, command.text, command.slug, Some(note.id))
            .await?;

        note.set_content(title, text, slug.clone());
        let updated = self
            .write_repo
            .update(NoteUpdate::from_note(&note))
            .await
            .map_err(|err| map_slug_conflict(err, &slug))?;

        tracing::info!(note_id = i64::from(updated.id), slug = %updated.slug, "note updated");
        Ok(updated.into())
    }
}
