// src/domain/note/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::note::repository::NoteReadRepository;
use crate::domain::note::value_objects::{NoteId, NoteSlug, NoteTitle, SLUG_MAX_LENGTH};

/// Domain service owning the slug policy: derivation from a title and
/// global uniqueness lookups.
pub struct NoteSlugService {
    read_repo: Arc<dyn NoteReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl NoteSlugService {
    #[must_use]
    pub fn new(read_repo: Arc<dyn NoteReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Deterministic: the same title always yields the same slug.
    pub fn derive(&self, title: &NoteTitle) -> DomainResult<NoteSlug> {
        let base = self.generator.slugify(title.as_str());
        let truncated: String = base.chars().take(SLUG_MAX_LENGTH).collect();
        let candidate = truncated.trim_end_matches('-');
        if candidate.is_empty() {
            return Err(DomainError::Validation(
                "unable to derive a slug from the title, enter one explicitly".into(),
            ));
        }
        NoteSlug::new(candidate)
    }

    /// True when `slug` belongs to a note other than `ignore_id`.
    pub async fn is_taken(&self, slug: &NoteSlug, ignore_id: Option<NoteId>) -> DomainResult<bool> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) => Ok(ignore_id != Some(existing.id)),
            None => Ok(false),
        }
    }
}
