//! In-memory note list/editor state machine.
//!
//! # Responsibility
//! - Own the ordered note list, the selection pointer and the draft buffers.
//! - Apply create/select/edit/commit/delete commands synchronously.
//!
//! # Invariants
//! - Note ids are allocated from a monotonic counter and never reused.
//! - `notes` is ordered newest first; only `create` changes the order.
//! - A selected id always references a note in `notes`.
//! - Drafts are empty whenever nothing is selected.
//! - Ignored commands leave every field untouched.

use crate::model::note::{DraftField, Note, NoteId};
use log::{debug, info};
use std::fmt::{Display, Formatter};

/// Selection state of the editor pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Editor shows the placeholder.
    #[default]
    NoNoteSelected,
    /// Editor is bound to one note's drafts.
    NoteSelected(NoteId),
}

impl Selection {
    /// Returns the selected id, if any.
    pub fn note_id(self) -> Option<NoteId> {
        match self {
            Self::NoNoteSelected => None,
            Self::NoteSelected(id) => Some(id),
        }
    }
}

/// Why a command left the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Command needs a selected note but none is selected.
    NoSelection,
    /// Command referenced an id that is not in the list.
    UnknownNote(NoteId),
}

impl Display for IgnoreReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no note selected"),
            Self::UnknownNote(id) => write!(f, "note not found: {id}"),
        }
    }
}

/// Result of a mutating command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The state transition ran.
    Applied,
    /// The command was a no-op.
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    /// Returns whether the command changed state.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Note list plus selection and draft buffers for one UI session.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    selection: Selection,
    draft_title: String,
    draft_content: String,
    next_id: u64,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Creates an empty store with nothing selected.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            selection: Selection::NoNoteSelected,
            draft_title: String::new(),
            draft_content: String::new(),
            next_id: 1,
        }
    }

    /// Notes in display order, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up one note by id.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selection.note_id()
    }

    /// Stored (committed) record of the selected note.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id().and_then(|id| self.note(id))
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_content(&self) -> &str {
        &self.draft_content
    }

    /// Returns whether the drafts differ from the selected note's stored values.
    ///
    /// Uncommitted drafts are discarded by `select` and `delete`; renderers may
    /// use this to warn before switching notes.
    pub fn has_unsaved_changes(&self) -> bool {
        match self.selected_note() {
            Some(note) => note.title != self.draft_title || note.content != self.draft_content,
            None => false,
        }
    }

    /// Prepends a new default note and selects it.
    pub fn create(&mut self) -> NoteId {
        let id = self.allocate_id();
        let note = Note::new(id);
        self.draft_title = note.title.clone();
        self.draft_content = note.content.clone();
        self.notes.insert(0, note);
        self.selection = Selection::NoteSelected(id);

        info!(
            "event=note_create module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        id
    }

    /// Selects a note and loads its stored values into the drafts.
    ///
    /// Uncommitted drafts of the previously selected note are dropped.
    pub fn select(&mut self, id: NoteId) -> CommandOutcome {
        let Some(note) = self.note(id) else {
            return ignored("note_select", IgnoreReason::UnknownNote(id));
        };
        let (title, content) = (note.title.clone(), note.content.clone());

        if self.has_unsaved_changes() {
            debug!(
                "event=draft_discard module=store status=ok note_id={}",
                self.selection.note_id().map_or(0, NoteId::get)
            );
        }
        self.draft_title = title;
        self.draft_content = content;
        self.selection = Selection::NoteSelected(id);

        debug!("event=note_select module=store status=ok note_id={id}");
        CommandOutcome::Applied
    }

    /// Replaces one draft buffer; the stored note is not touched.
    pub fn edit_draft(&mut self, field: DraftField, value: impl Into<String>) -> CommandOutcome {
        if self.selection == Selection::NoNoteSelected {
            return ignored("draft_edit", IgnoreReason::NoSelection);
        }

        let value = value.into();
        match field {
            DraftField::Title => self.draft_title = value,
            DraftField::Content => self.draft_content = value,
        }
        CommandOutcome::Applied
    }

    /// Writes both drafts into the selected note, keeping list order.
    pub fn commit(&mut self) -> CommandOutcome {
        let Some(id) = self.selected_id() else {
            return ignored("note_commit", IgnoreReason::NoSelection);
        };
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return ignored("note_commit", IgnoreReason::UnknownNote(id));
        };

        note.title.clone_from(&self.draft_title);
        note.content.clone_from(&self.draft_content);

        info!("event=note_commit module=store status=ok note_id={id}");
        CommandOutcome::Applied
    }

    /// Removes a note; clears selection and drafts when it was selected.
    pub fn delete(&mut self, id: NoteId) -> CommandOutcome {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return ignored("note_delete", IgnoreReason::UnknownNote(id));
        };

        self.notes.remove(index);
        let was_selected = self.selection == Selection::NoteSelected(id);
        if was_selected {
            self.clear_selection();
        }

        info!(
            "event=note_delete module=store status=ok note_id={} was_selected={} count={}",
            id,
            was_selected,
            self.notes.len()
        );
        CommandOutcome::Applied
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn clear_selection(&mut self) {
        self.selection = Selection::NoNoteSelected;
        self.draft_title.clear();
        self.draft_content.clear();
    }
}

fn ignored(event: &str, reason: IgnoreReason) -> CommandOutcome {
    debug!("event={event} module=store status=ignored reason=\"{reason}\"");
    CommandOutcome::Ignored(reason)
}
