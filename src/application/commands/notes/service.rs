// src/application/commands/notes/service.rs
use std::sync::Arc;

use crate::domain::note::{NoteReadRepository, NoteWriteRepository, services::NoteSlugService};

pub struct NoteCommandService {
    pub(super) write_repo: Arc<dyn NoteWriteRepository>,
    pub(super) read_repo: Arc<dyn NoteReadRepository>,
    pub(super) slug_service: Arc<NoteSlugService>,
}

impl NoteCommandService {
    #[must_use]
    pub fn new(
        write_repo: Arc<dyn NoteWriteRepository>,
        read_repo: Arc<dyn NoteReadRepository>,
        slug_service: Arc<NoteSlugService>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
        }
    }
}
