//! Sidebar and editor pane projections.
//!
//! # Responsibility
//! - Build `NotesView` snapshots that a renderer can draw without touching
//!   store internals.
//! - Derive the short sidebar preview from note content.
//!
//! # Invariants
//! - `preview` keeps at most `PREVIEW_CHARS` characters before the ellipsis.
//! - Editor fields carry draft values, never the stored ones.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Heading rendered above the note list.
pub const SIDEBAR_HEADING: &str = "Notes";
/// Label of the create button.
pub const NEW_NOTE_LABEL: &str = "+ New Note";
/// Message shown in the editor pane while nothing is selected.
pub const EMPTY_EDITOR_MESSAGE: &str = "Select or create a note to begin.";
/// Placeholder of the title input.
pub const TITLE_PLACEHOLDER: &str = "Note title...";
/// Placeholder of the content area.
pub const CONTENT_PLACEHOLDER: &str = "Write your note here...";
/// Number of content characters shown in a sidebar row.
pub const PREVIEW_CHARS: usize = 20;

const PREVIEW_SUFFIX: &str = "...";

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteListItem {
    pub id: NoteId,
    /// Stored title; uncommitted drafts are not reflected.
    pub title: String,
    pub preview: String,
    /// True for the selected note.
    pub is_active: bool,
}

impl NoteListItem {
    fn from_note(note: &Note, selected: Option<NoteId>) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            preview: derive_preview(&note.content),
            is_active: selected == Some(note.id),
        }
    }
}

/// Editor pane state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditorPane {
    /// Nothing selected.
    Placeholder { message: String },
    /// Inputs bound to the selected note's drafts.
    Editing {
        note_id: NoteId,
        title: String,
        content: String,
        has_unsaved_changes: bool,
    },
}

/// Full snapshot of one session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotesView {
    pub sidebar_heading: String,
    pub items: Vec<NoteListItem>,
    pub editor: EditorPane,
}

impl NotesView {
    /// Projects the current store state.
    pub fn from_store(store: &NoteStore) -> Self {
        let selected = store.selected_id();
        let items = store
            .notes()
            .iter()
            .map(|note| NoteListItem::from_note(note, selected))
            .collect();

        let editor = match selected {
            Some(note_id) => EditorPane::Editing {
                note_id,
                title: store.draft_title().to_string(),
                content: store.draft_content().to_string(),
                has_unsaved_changes: store.has_unsaved_changes(),
            },
            None => EditorPane::Placeholder {
                message: EMPTY_EDITOR_MESSAGE.to_string(),
            },
        };

        Self {
            sidebar_heading: SIDEBAR_HEADING.to_string(),
            items,
            editor,
        }
    }

    /// Returns the active sidebar row, if any.
    pub fn active_item(&self) -> Option<&NoteListItem> {
        self.items.iter().find(|item| item.is_active)
    }
}

/// Derives the sidebar preview from note content.
///
/// Whitespace runs collapse to one space so multi-line content stays on one
/// row. The ellipsis is always appended, including for short or empty content.
pub fn derive_preview(content: &str) -> String {
    let normalized = WHITESPACE_RE.replace_all(content, " ");
    let mut preview: String = normalized.trim().chars().take(PREVIEW_CHARS).collect();
    preview.push_str(PREVIEW_SUFFIX);
    preview
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn preview_truncates_by_characters_not_bytes() {
        let preview = derive_preview("ééééééééééééééééééééééé");
        assert_eq!(preview.chars().count(), 23);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn preview_collapses_line_breaks() {
        assert_eq!(derive_preview("milk\n\n  eggs\tbread"), "milk eggs bread...");
    }

    #[test]
    fn preview_of_empty_content_is_only_ellipsis() {
        assert_eq!(derive_preview(""), "...");
    }
}
