// src/domain/note/entity.rs
use crate::domain::note::value_objects::{NoteId, NoteSlug, NoteText, NoteTitle};
use crate::domain::user::UserId;

#[derive(Debug, Clone)]
pub struct Note {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
}

impl Note {
    #[must_use]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn set_content(&mut self, title: NoteTitle, text: NoteText, slug: NoteSlug) {
        self.title = title;
        self.text = text;
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
    pub author_id: UserId,
}

/// Full replacement of the editable fields. Carries no author: authorship never changes.
#[derive(Debug, Clone)]
pub struct NoteUpdate {
    pub id: NoteId,
    pub title: NoteTitle,
    pub text: NoteText,
    pub slug: NoteSlug,
}

impl NoteUpdate {
    #[must_use]
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }
}
