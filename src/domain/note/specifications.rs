use crate::domain::note::entity::Note;
use crate::domain::user::UserId;

/// Only the author may view, edit or delete a note.
pub struct NoteOwnershipSpec<'a> {
    note: &'a Note,
    user_id: UserId,
}

impl<'a> NoteOwnershipSpec<'a> {
    #[must_use]
    pub fn new(note: &'a Note, user_id: UserId) -> Self {
        Self { note, user_id }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.note.is_authored_by(self.user_id)
    }
}
