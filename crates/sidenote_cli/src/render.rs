//! Plain-text rendering of a `NotesView`.

use sidenote_core::view::notes_view::{CONTENT_PLACEHOLDER, NEW_NOTE_LABEL, TITLE_PLACEHOLDER};
use sidenote_core::{EditorPane, NotesView};
use std::fmt::Write;

pub fn render_sidebar(view: &NotesView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==  [{}]", view.sidebar_heading, NEW_NOTE_LABEL);
    for item in &view.items {
        let marker = if item.is_active { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} #{} {}", item.id, item.title);
        let _ = writeln!(out, "      {}", item.preview);
    }
    out
}

pub fn render_editor(view: &NotesView) -> String {
    match &view.editor {
        EditorPane::Placeholder { message } => format!("{message}\n"),
        EditorPane::Editing {
            note_id,
            title,
            content,
            has_unsaved_changes,
        } => {
            let mut out = String::new();
            let status = if *has_unsaved_changes { " (unsaved)" } else { "" };
            let _ = writeln!(out, "-- editing #{note_id}{status} --");
            let _ = writeln!(out, "title:   {}", or_placeholder(title, TITLE_PLACEHOLDER));
            let _ = writeln!(out, "content:");
            for line in or_placeholder(content, CONTENT_PLACEHOLDER).lines() {
                let _ = writeln!(out, "  {line}");
            }
            out
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
