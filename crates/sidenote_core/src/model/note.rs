//! Note domain model.
//!
//! # Responsibility
//! - Define the note record rendered by the sidebar and editor pane.
//! - Parse identifiers and draft field names coming from UI/FFI input.
//!
//! # Invariants
//! - `NoteId` values are positive; `0` is never allocated.
//! - A freshly created note has title `DEFAULT_NOTE_TITLE` and empty content.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Title assigned to every newly created note.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// Stable identifier of one note within a session.
///
/// Serialized as the bare number to keep renderer payloads flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wraps a raw identifier value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an id string cannot be parsed into a `NoteId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNoteIdError {
    /// Input was empty after trimming.
    Empty,
    /// Input is not a positive integer.
    Invalid(String),
}

impl Display for ParseNoteIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "note id cannot be empty"),
            Self::Invalid(value) => write!(f, "invalid note id: `{value}`"),
        }
    }
}

impl Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteIdError::Empty);
        }
        match trimmed.parse::<u64>() {
            Ok(0) | Err(_) => Err(ParseNoteIdError::Invalid(trimmed.to_string())),
            Ok(raw) => Ok(Self(raw)),
        }
    }
}

/// One note shown in the sidebar and edited in the editor pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned at creation and immutable afterwards.
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Creates a note with the default title and empty content.
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
        }
    }
}

/// Draft buffer addressed by an editor input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// Single-line title input.
    Title,
    /// Multi-line content area.
    Content,
}

impl DraftField {
    /// Returns the stable lowercase name used by FFI and CLI input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown draft field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDraftFieldError(pub String);

impl Display for ParseDraftFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported draft field `{}`; expected title|content",
            self.0
        )
    }
}

impl Error for ParseDraftFieldError {}

impl FromStr for DraftField {
    type Err = ParseDraftFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            other => Err(ParseDraftFieldError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DraftField, Note, NoteId, ParseNoteIdError, DEFAULT_NOTE_TITLE};

    #[test]
    fn new_note_uses_default_title_and_empty_content() {
        let note = Note::new(NoteId::new(7));
        assert_eq!(note.id.get(), 7);
        assert_eq!(note.title, DEFAULT_NOTE_TITLE);
        assert!(note.content.is_empty());
    }

    #[test]
    fn note_id_parses_trimmed_positive_integers() {
        assert_eq!(" 42 ".parse::<NoteId>().unwrap(), NoteId::new(42));
        assert_eq!("".parse::<NoteId>().unwrap_err(), ParseNoteIdError::Empty);
        assert_eq!(
            "0".parse::<NoteId>().unwrap_err(),
            ParseNoteIdError::Invalid("0".to_string())
        );
        assert!("-3".parse::<NoteId>().is_err());
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn draft_field_parses_case_insensitively() {
        assert_eq!("Title".parse::<DraftField>().unwrap(), DraftField::Title);
        assert_eq!(
            " CONTENT ".parse::<DraftField>().unwrap(),
            DraftField::Content
        );
        let err = "body".parse::<DraftField>().unwrap_err();
        assert!(err.to_string().contains("title|content"));
    }
}
