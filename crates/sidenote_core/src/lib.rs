//! Core domain logic for SideNote.
//! This crate owns the note list/editor state machine and its projections;
//! renderers (FFI, CLI) only issue commands and draw snapshots.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{
    default_log_level, init_logging, init_logging_from_env, logging_status, LogLevel,
    LoggingError,
};
pub use model::note::{
    DraftField, Note, NoteId, ParseDraftFieldError, ParseNoteIdError, DEFAULT_NOTE_TITLE,
};
pub use store::note_store::{CommandOutcome, IgnoreReason, NoteStore, Selection};
pub use view::notes_view::{derive_preview, EditorPane, NoteListItem, NotesView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
