//! Domain model for the note list/editor session.
//!
//! # Responsibility
//! - Define the note record and its identifier.
//! - Define the editable draft fields addressed by editor input.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is never reused.

pub mod note;
