//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note session commands and snapshots to Dart via FRB.
//! - Translate string input from widgets into typed core commands.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide session backs every call.
//! - Rejected input never mutates the session.

use log::warn;
use once_cell::sync::Lazy;
use sidenote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CommandOutcome, DraftField, EditorPane, NoteId, NoteListItem, NoteStore, NotesView,
};
use std::sync::{Mutex, MutexGuard};

static SESSION: Lazy<Mutex<NoteStore>> = Lazy::new(|| Mutex::new(NoteStore::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Result envelope for one session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesActionResponse {
    /// Whether the command changed the session.
    pub ok: bool,
    /// Affected note ID in string form.
    pub note_id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl NotesActionResponse {
    fn success(message: impl Into<String>, note_id: Option<NoteId>) -> Self {
        Self {
            ok: true,
            note_id: note_id.map(|id| id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }

    fn from_outcome(
        outcome: CommandOutcome,
        applied_message: &str,
        note_id: Option<NoteId>,
    ) -> Self {
        match outcome {
            CommandOutcome::Applied => Self::success(applied_message, note_id),
            CommandOutcome::Ignored(reason) => Self::failure(format!("Ignored: {reason}.")),
        }
    }
}

/// Sidebar row shown to Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListItem {
    pub note_id: String,
    pub title: String,
    pub preview: String,
    pub is_active: bool,
}

/// Snapshot of the whole session for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesSnapshotResponse {
    pub heading: String,
    pub items: Vec<NotesListItem>,
    /// Selected note ID; `None` means the editor shows `placeholder`.
    pub selected_note_id: Option<String>,
    pub draft_title: String,
    pub draft_content: String,
    pub has_unsaved_changes: bool,
    /// Empty-editor message; empty while a note is selected.
    pub placeholder: String,
}

/// Creates a note, selects it, and returns its ID.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_create() -> NotesActionResponse {
    let id = with_session(|store| store.create());
    NotesActionResponse::success("Note created.", Some(id))
}

/// Selects a note by ID, replacing the drafts with its stored values.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_select(note_id: String) -> NotesActionResponse {
    let id = match note_id.parse::<NoteId>() {
        Ok(id) => id,
        Err(err) => return NotesActionResponse::failure(format!("notes_select failed: {err}")),
    };
    let outcome = with_session(|store| store.select(id));
    NotesActionResponse::from_outcome(outcome, "Note selected.", Some(id))
}

/// Updates the `title` or `content` draft of the selected note.
///
/// Called on every widget change; nothing is stored until `notes_commit`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_edit_draft(field: String, value: String) -> NotesActionResponse {
    let field = match field.parse::<DraftField>() {
        Ok(field) => field,
        Err(err) => {
            return NotesActionResponse::failure(format!("notes_edit_draft failed: {err}"))
        }
    };
    let (outcome, selected) = with_session(|store| {
        let outcome = store.edit_draft(field, value);
        (outcome, store.selected_id())
    });
    NotesActionResponse::from_outcome(outcome, "Draft updated.", selected)
}

/// Writes the drafts into the selected note. Wire to input blur.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_commit() -> NotesActionResponse {
    let (outcome, selected) = with_session(|store| (store.commit(), store.selected_id()));
    NotesActionResponse::from_outcome(outcome, "Note saved.", selected)
}

/// Deletes a note by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(note_id: String) -> NotesActionResponse {
    let id = match note_id.parse::<NoteId>() {
        Ok(id) => id,
        Err(err) => return NotesActionResponse::failure(format!("notes_delete failed: {err}")),
    };
    let outcome = with_session(|store| store.delete(id));
    NotesActionResponse::from_outcome(outcome, "Note deleted.", Some(id))
}

/// Returns the current session projection for rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_snapshot() -> NotesSnapshotResponse {
    let view = with_session(|store| NotesView::from_store(store));
    to_snapshot_response(view)
}

/// Drops every note and starts a fresh session.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_reset() {
    with_session(|store| *store = NoteStore::new());
}

fn with_session<T>(f: impl FnOnce(&mut NoteStore) -> T) -> T {
    let mut guard = lock_session();
    f(&mut guard)
}

fn lock_session() -> MutexGuard<'static, NoteStore> {
    // Every store method leaves a consistent state, so a poisoned lock is safe to reuse.
    SESSION.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_snapshot_response(view: NotesView) -> NotesSnapshotResponse {
    let items = view.items.into_iter().map(to_list_item).collect();
    match view.editor {
        EditorPane::Placeholder { message } => NotesSnapshotResponse {
            heading: view.sidebar_heading,
            items,
            selected_note_id: None,
            draft_title: String::new(),
            draft_content: String::new(),
            has_unsaved_changes: false,
            placeholder: message,
        },
        EditorPane::Editing {
            note_id,
            title,
            content,
            has_unsaved_changes,
        } => NotesSnapshotResponse {
            heading: view.sidebar_heading,
            items,
            selected_note_id: Some(note_id.to_string()),
            draft_title: title,
            draft_content: content,
            has_unsaved_changes,
            placeholder: String::new(),
        },
    }
}

fn to_list_item(item: NoteListItem) -> NotesListItem {
    NotesListItem {
        note_id: item.id.to_string(),
        title: item.title,
        preview: item.preview,
        is_active: item.is_active,
    }
}
