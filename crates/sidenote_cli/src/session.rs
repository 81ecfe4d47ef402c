//! Terminal session: applies commands to one store and redraws.

use crate::command::{Command, HELP};
use crate::render::{render_editor, render_sidebar};
use sidenote_core::{CommandOutcome, DraftField, NoteStore, NotesView};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    store: NoteStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        let outcome = match command {
            Command::New => {
                let id = self.store.create();
                return Reply::Print(format!("created #{id}\n{}", self.redraw()));
            }
            Command::Select(id) => self.store.select(id),
            Command::Title(value) => self.store.edit_draft(DraftField::Title, value),
            Command::Content(value) => self.store.edit_draft(DraftField::Content, value),
            Command::Save => self.store.commit(),
            Command::Delete(target) => match target.or_else(|| self.store.selected_id()) {
                Some(id) => self.store.delete(id),
                None => return Reply::Print("nothing selected to delete\n".to_string()),
            },
            Command::List => {
                return Reply::Print(render_sidebar(&NotesView::from_store(&self.store)))
            }
            Command::Show => {
                return Reply::Print(render_editor(&NotesView::from_store(&self.store)))
            }
            Command::Help => return Reply::Print(format!("{HELP}\n")),
            Command::Quit => return Reply::Quit,
        };

        match outcome {
            CommandOutcome::Applied => Reply::Print(self.redraw()),
            CommandOutcome::Ignored(reason) => Reply::Print(format!("ignored: {reason}\n")),
        }
    }

    fn redraw(&self) -> String {
        let view = NotesView::from_store(&self.store);
        format!("{}{}", render_sidebar(&view), render_editor(&view))
    }
}

#[cfg(test)]
mod tests {
    use super::{Reply, Session};
    use crate::command::parse_command;
    use sidenote_core::NoteId;

    fn run(session: &mut Session, line: &str) -> Reply {
        session.handle(parse_command(line).unwrap())
    }

    #[test]
    fn scripted_session_creates_edits_saves_and_deletes() {
        let mut session = Session::new();
        run(&mut session, "new");
        run(&mut session, "title Groceries");
        let saved = run(&mut session, "save");
        assert!(matches!(saved, Reply::Print(ref text) if text.contains("> #1 Groceries")));

        run(&mut session, "new");
        run(&mut session, "delete 1");
        let ids: Vec<_> = session.store().notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![NoteId::new(2)]);
        assert_eq!(session.store().selected_id(), Some(NoteId::new(2)));
    }

    #[test]
    fn delete_without_selection_reports_instead_of_failing() {
        let mut session = Session::new();
        assert_eq!(
            run(&mut session, "delete"),
            Reply::Print("nothing selected to delete\n".to_string())
        );
        assert_eq!(
            run(&mut session, "save"),
            Reply::Print("ignored: no note selected\n".to_string())
        );
        assert_eq!(run(&mut session, "quit"), Reply::Quit);
    }
}
