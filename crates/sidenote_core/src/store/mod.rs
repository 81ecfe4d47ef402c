//! Session state owned by one UI.
//!
//! # Responsibility
//! - Hold the note list/editor state machine driven by renderer commands.
//! - Keep rendering concerns out of state transitions.

pub mod note_store;
