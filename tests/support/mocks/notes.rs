// tests/support/mocks/notes.rs
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use yanote::domain::errors::{DomainError, DomainResult};
use yanote::domain::note::{
    NewNote, Note, NoteId, NoteReadRepository, NoteSlug, NoteUpdate, NoteWriteRepository,
};
use yanote::domain::user::UserId;

/// Note table keyed by id. Slug uniqueness is enforced on every write, the
/// same way the `notes_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryNotes {
    notes: Mutex<BTreeMap<i64, Note>>,
}

impl InMemoryNotes {
    pub fn count(&self) -> usize {
        self.notes.lock().unwrap().len()
    }

    pub fn by_slug(&self, slug: &str) -> Option<Note> {
        self.notes
            .lock()
            .unwrap()
            .values()
            .find(|note| note.slug.as_str() == slug)
            .cloned()
    }

    pub fn all(&self) -> Vec<Note> {
        self.notes.lock().unwrap().values().cloned().collect()
    }

    fn slug_in_use(notes: &BTreeMap<i64, Note>, slug: &NoteSlug, except: Option<NoteId>) -> bool {
        notes
            .values()
            .any(|note| &note.slug == slug && Some(note.id) != except)
    }
}

#[async_trait]
impl NoteWriteRepository for InMemoryNotes {
    async fn insert(&self, note: NewNote) -> DomainResult<Note> {
        let mut notes = self.notes.lock().unwrap();
        if Self::slug_in_use(&notes, &note.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let next_id = notes.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Note {
            id: NoteId::new(next_id)?,
            title: note.title,
            text: note.text,
            slug: note.slug,
            author_id: note.author_id,
        };
        notes.insert(next_id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: NoteUpdate) -> DomainResult<Note> {
        let mut notes = self.notes.lock().unwrap();
        if Self::slug_in_use(&notes, &update.slug, Some(update.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let note = notes
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("note not found".into()))?;
        note.title = update.title;
        note.text = update.text;
        note.slug = update.slug;
        Ok(note.clone())
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        self.notes
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("note not found".into()))
    }
}

#[async_trait]
impl NoteReadRepository for InMemoryNotes {
    async fn find_by_slug(&self, slug: &NoteSlug) -> DomainResult<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .values()
            .find(|note| &note.slug == slug)
            .cloned())
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .values()
            .filter(|note| note.author_id == author_id)
            .cloned()
            .collect())
    }
}
