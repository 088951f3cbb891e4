// src/application/commands/notes/mod.rs
mod create;
mod delete;
mod form;
mod service;
mod update;

pub use create::CreateNoteCommand;
pub use delete::DeleteNoteCommand;
pub use form::SLUG_TAKEN_WARNING;
pub use service::NoteCommandService;
pub use update::UpdateNoteCommand;
