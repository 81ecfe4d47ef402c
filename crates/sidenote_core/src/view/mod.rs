//! Render-ready projections of a note session.
//!
//! # Responsibility
//! - Derive sidebar rows and the editor pane from `NoteStore` state.
//! - Keep projections read-only; commands always go through the store.
//!
//! # Invariants
//! - Sidebar rows follow store order (newest first).
//! - At most one row is marked active.

pub mod notes_view;
