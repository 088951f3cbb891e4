use crate::domain::note::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.into(),
            title: note.title.into(),
            text: note.text.into(),
            slug: note.slug.into(),
            author_id: note.author_id.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteListDto {
    pub items: Vec<NoteDto>,
}

/// Raw note form values: what the user submitted, or the note being edited.
/// Missing fields deserialize as empty strings so they surface as
/// "required" errors rather than a rejected request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteFormDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

impl NoteFormDto {
    /// Blank slugs count as omitted.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        let slug = self.slug.trim();
        (!slug.is_empty()).then(|| slug.to_string())
    }
}

impl From<&NoteDto> for NoteFormDto {
    fn from(note: &NoteDto) -> Self {
        Self {
            title: note.title.clone(),
            text: note.text.clone(),
            slug: note.slug.clone(),
        }
    }
}
