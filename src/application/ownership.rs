// src/application/ownership.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::note::{
    Note, NoteReadRepository, NoteSlug, specifications::NoteOwnershipSpec,
};

fn note_not_found() -> ApplicationError {
    ApplicationError::not_found("note not found")
}

/// Load the note at `slug` on behalf of `actor`.
///
/// Notes owned by someone else are reported exactly like missing ones, so
/// the response never reveals that another user's slug exists.
pub(crate) async fn load_owned_note(
    read_repo: &dyn NoteReadRepository,
    actor: &AuthenticatedUser,
    slug: &str,
) -> ApplicationResult<Note> {
    let slug = NoteSlug::new(slug).map_err(|_| note_not_found())?;
    let note = read_repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(note_not_found)?;

    if !NoteOwnershipSpec::new(&note, actor.id).is_satisfied() {
        tracing::debug!(slug = %note.slug, user_id = %actor.id, "note access by non-author");
        return Err(note_not_found());
    }

    Ok(note)
}
