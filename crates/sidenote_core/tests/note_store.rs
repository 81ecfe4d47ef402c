use sidenote_core::{
    CommandOutcome, DraftField, IgnoreReason, NoteId, NoteStore, Selection, DEFAULT_NOTE_TITLE,
};
use std::collections::HashSet;

fn ids(store: &NoteStore) -> Vec<NoteId> {
    store.notes().iter().map(|note| note.id).collect()
}

#[test]
fn new_store_is_empty_with_nothing_selected() {
    let store = NoteStore::new();

    assert!(store.is_empty());
    assert_eq!(store.selection(), Selection::NoNoteSelected);
    assert_eq!(store.draft_title(), "");
    assert_eq!(store.draft_content(), "");
    assert!(!store.has_unsaved_changes());
}

#[test]
fn create_prepends_selects_and_loads_defaults_into_drafts() {
    let mut store = NoteStore::new();
    let first = store.create();
    let second = store.create();

    assert_eq!(ids(&store), vec![second, first]);
    assert_eq!(store.notes()[0].title, DEFAULT_NOTE_TITLE);
    assert_eq!(store.notes()[0].content, "");
    assert_eq!(store.selection(), Selection::NoteSelected(second));
    assert_eq!(store.draft_title(), DEFAULT_NOTE_TITLE);
    assert_eq!(store.draft_content(), "");
}

#[test]
fn ids_stay_unique_across_creates_and_deletes() {
    let mut store = NoteStore::new();
    let mut seen = HashSet::new();

    for round in 0..50 {
        let id = store.create();
        assert!(seen.insert(id), "id {id} was reused");
        if round % 3 == 0 {
            let _ = store.delete(id);
        }
    }

    let listed = ids(&store);
    let unique: HashSet<_> = listed.iter().copied().collect();
    assert_eq!(unique.len(), listed.len());
}

#[test]
fn select_loads_stored_values_and_discards_uncommitted_drafts() {
    let mut store = NoteStore::new();
    let a = store.create();
    let _ = store.edit_draft(DraftField::Title, "Groceries");
    let _ = store.edit_draft(DraftField::Content, "milk");
    let _ = store.commit();

    let b = store.create();
    let _ = store.edit_draft(DraftField::Title, "never saved");
    assert!(store.has_unsaved_changes());

    assert_eq!(store.select(a), CommandOutcome::Applied);
    assert_eq!(store.draft_title(), "Groceries");
    assert_eq!(store.draft_content(), "milk");

    assert_eq!(store.select(b), CommandOutcome::Applied);
    assert_eq!(store.draft_title(), DEFAULT_NOTE_TITLE);
    assert_eq!(store.note(b).unwrap().title, DEFAULT_NOTE_TITLE);
}

#[test]
fn edit_draft_does_not_touch_stored_note_until_commit() {
    let mut store = NoteStore::new();
    let id = store.create();

    assert!(store.edit_draft(DraftField::Content, "draft body").is_applied());
    assert_eq!(store.note(id).unwrap().content, "");
    assert_eq!(store.draft_content(), "draft body");
    assert!(store.has_unsaved_changes());
}

#[test]
fn commit_writes_last_drafts_and_keeps_order() {
    let mut store = NoteStore::new();
    let a = store.create();
    let b = store.create();
    let c = store.create();
    let before = ids(&store);

    let _ = store.select(a);
    let _ = store.edit_draft(DraftField::Title, "first");
    let _ = store.edit_draft(DraftField::Title, "second");
    let _ = store.edit_draft(DraftField::Content, "body");
    assert_eq!(store.commit(), CommandOutcome::Applied);

    assert_eq!(ids(&store), before);
    assert_eq!(ids(&store), vec![c, b, a]);
    let stored = store.note(a).unwrap();
    assert_eq!(stored.title, "second");
    assert_eq!(stored.content, "body");
    assert!(!store.has_unsaved_changes());
}

#[test]
fn commands_needing_selection_are_ignored_without_one() {
    let mut store = NoteStore::new();
    let id = store.create();
    let _ = store.delete(id);

    assert_eq!(
        store.edit_draft(DraftField::Title, "x"),
        CommandOutcome::Ignored(IgnoreReason::NoSelection)
    );
    assert_eq!(
        store.commit(),
        CommandOutcome::Ignored(IgnoreReason::NoSelection)
    );
    assert_eq!(store.draft_title(), "");
    assert!(store.is_empty());
}

#[test]
fn delete_selected_clears_selection_and_drafts() {
    let mut store = NoteStore::new();
    let keep = store.create();
    let doomed = store.create();
    let _ = store.edit_draft(DraftField::Content, "unsaved");

    assert_eq!(store.delete(doomed), CommandOutcome::Applied);

    assert_eq!(ids(&store), vec![keep]);
    assert!(store.note(doomed).is_none());
    assert_eq!(store.selection(), Selection::NoNoteSelected);
    assert_eq!(store.draft_title(), "");
    assert_eq!(store.draft_content(), "");
}

#[test]
fn delete_other_note_keeps_selection_and_drafts() {
    let mut store = NoteStore::new();
    let other = store.create();
    let selected = store.create();
    let _ = store.edit_draft(DraftField::Title, "in progress");

    assert_eq!(store.delete(other), CommandOutcome::Applied);

    assert_eq!(store.selected_id(), Some(selected));
    assert_eq!(store.draft_title(), "in progress");
    assert_eq!(ids(&store), vec![selected]);
}

#[test]
fn delete_unknown_id_is_ignored() {
    let mut store = NoteStore::new();
    let id = store.create();

    assert_eq!(
        store.delete(NoteId::new(404)),
        CommandOutcome::Ignored(IgnoreReason::UnknownNote(NoteId::new(404)))
    );
    assert_eq!(ids(&store), vec![id]);
    assert_eq!(store.selected_id(), Some(id));
}

#[test]
fn groceries_scenario() {
    let mut store = NoteStore::new();

    let a = store.create();
    assert_eq!(a, NoteId::new(1));
    assert_eq!(store.notes()[0].title, "New Note");

    let _ = store.edit_draft(DraftField::Title, "Groceries");
    let _ = store.commit();
    assert_eq!(store.notes()[0].title, "Groceries");

    let b = store.create();
    assert_eq!(ids(&store), vec![b, a]);

    let _ = store.delete(a);
    assert_eq!(ids(&store), vec![b]);
    assert_eq!(store.selected_id(), Some(b));
}
