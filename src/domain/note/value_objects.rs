// src/domain/note/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const SLUG_MAX_LENGTH: usize = 100;

pub(crate) const REQUIRED_MESSAGE: &str = "this field is required";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(pub i64);

impl NoteId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("note id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<NoteId> for i64 {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

pub(crate) fn ensure_max_length(value: &str, max: usize) -> DomainResult<()> {
    let length = value.chars().count();
    if length > max {
        return Err(DomainError::Validation(format!(
            "ensure this value has at most {max} characters (it has {length})"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    /// Surrounding whitespace is stripped before validation and storage.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(REQUIRED_MESSAGE.into()));
        }
        ensure_max_length(&value, TITLE_MAX_LENGTH)?;
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NoteTitle> for String {
    fn from(value: NoteTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText(String);

impl NoteText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation(REQUIRED_MESSAGE.into()));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NoteText> for String {
    fn from(value: NoteText) -> Self {
        value.0
    }
}

/// URL-safe note identifier: ASCII letters, digits, hyphens and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteSlug(String);

impl NoteSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(REQUIRED_MESSAGE.into()));
        }
        ensure_max_length(&value, SLUG_MAX_LENGTH)?;
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(
                "enter a valid slug consisting of letters, numbers, underscores or hyphens".into(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NoteSlug> for String {
    fn from(value: NoteSlug) -> Self {
        value.0
    }
}
