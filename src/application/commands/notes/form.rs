// src/application/commands/notes/form.rs
use super::NoteCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        forms::FieldErrors,
    },
    domain::{
        errors::DomainError,
        note::{NoteId, NoteSlug, NoteText, NoteTitle},
    },
};

/// Appended to a colliding slug to form the field error message.
pub const SLUG_TAKEN_WARNING: &str =
    " - такой slug уже существует, придумайте уникальное значение!";

pub(super) struct ValidatedNote {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
}

fn slug_taken_message(slug: &NoteSlug) -> String {
    format!("{slug}{SLUG_TAKEN_WARNING}")
}

fn slug_taken(slug: &NoteSlug) -> ApplicationError {
    ApplicationError::form_field("slug", slug_taken_message(slug))
}

/// A unique-constraint rejection on insert/update can only be the slug.
pub(super) fn map_slug_conflict(err: DomainError, slug: &NoteSlug) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => slug_taken(slug),
        other => other.into(),
    }
}

impl NoteCommandService {
    /// Validate every field, collecting all errors. `editing` is the note
    /// being edited, whose own slug never counts as a collision.
    pub(super) async fn validate_form(
        &self,
        title: String,
        text: String,
        slug: Option<String>,
        editing: Option<NoteId>,
    ) -> ApplicationResult<ValidatedNote> {
        let mut errors = FieldErrors::new();
        let title = errors.capture("title", NoteTitle::new(title));
        let text = errors.capture("text", NoteText::new(text));

        let slug = match slug {
            Some(explicit) => {
                let candidate = errors.capture("slug", NoteSlug::new(explicit));
                match candidate {
                    Some(slug) if self.slug_service.is_taken(&slug, editing).await? => {
                        errors.add("slug", slug_taken_message(&slug));
                        None
                    }
                    other => other,
                }
            }
            // Derived slugs are not pre-checked; the unique constraint has the final word.
            None => title
                .as_ref()
                .and_then(|title| errors.capture("slug", self.slug_service.derive(title))),
        };

        errors.into_result()?;

        match (title, text, slug) {
            (Some(title), Some(text), Some(slug)) => Ok(ValidatedNote { title, text, slug }),
            _ => Err(ApplicationError::infrastructure(
                "note form passed validation with missing fields",
            )),
        }
    }
}
