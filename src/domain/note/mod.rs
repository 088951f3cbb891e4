// src/domain/note/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewNote, Note, NoteUpdate};
pub use repository::{NoteReadRepository, NoteWriteRepository};
pub use value_objects::{NoteId, NoteSlug, NoteText, NoteTitle};
