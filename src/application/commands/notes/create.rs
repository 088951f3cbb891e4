// src/application/commands/notes/create.rs
use super::{
    NoteCommandService,
    form::{ValidatedNote, map_slug_conflict},
};
use crate::{
    application::{
        dto::{AuthenticatedUser, NoteDto},
        error::ApplicationResult,
    },
    domain::note::NewNote,
};

pub struct CreateNoteCommand {
    pub title: String,
    pub text: String,
    /// `None` derives the slug from the title.
    pub slug: Option<String>,
}

impl NoteCommandService {
    pub async fn create_note(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNoteCommand,
    ) -> ApplicationResult<NoteDto> {
        let ValidatedNote { title, text, slug } = self
            .validate_form(command.title, command.text, command.slug, None)
            .await?;

        let new_note = NewNote {
            title,
            text,
            slug: slug.clone(),
            author_id: actor.id,
        };

        let created = self
            .write_repo
            .insert(new_note)
            .await
            .map_err(|err| map_slug_conflict(err, &slug))?;

        tracing::info!(
            note_id = i64::from(created.id),
            slug = %created.slug,
            author_id = %actor.id,
            "note created"
        );
        Ok(created.into())
    }
}
