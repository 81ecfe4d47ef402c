//! Line command parsing.
//!
//! # Responsibility
//! - Turn one input line into a typed session command.
//! - Keep parse failures as values; the loop prints them and continues.

use sidenote_core::{NoteId, ParseNoteIdError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One user action read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Select(NoteId),
    Title(String),
    Content(String),
    /// Commit drafts; the terminal stand-in for input blur.
    Save,
    /// Delete the given note, or the selected one when `None`.
    Delete(Option<NoteId>),
    List,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(ParseNoteIdError),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::UnknownCommand(name) => write!(f, "unknown command `{name}`; try `help`"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs a note id"),
            Self::InvalidId(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidId(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseNoteIdError> for CommandParseError {
    fn from(value: ParseNoteIdError) -> Self {
        Self::InvalidId(value)
    }
}

pub const HELP: &str = "\
commands:
  new               create a note and select it
  select <id>       select a note (unsaved drafts are dropped)
  title <text>      edit the title draft
  content <text>    edit the content draft (`\\n` inserts a newline)
  save              store the drafts in the selected note
  delete [<id>]     delete a note (default: selected)
  list | show       redraw sidebar / editor
  help | quit";

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Err(CommandParseError::Empty);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (trimmed, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "new" => Ok(Command::New),
        "select" => {
            let arg = rest.trim();
            if arg.is_empty() {
                return Err(CommandParseError::MissingArgument("select"));
            }
            Ok(Command::Select(arg.parse()?))
        }
        "title" => Ok(Command::Title(rest.to_string())),
        "content" => Ok(Command::Content(rest.replace("\\n", "\n"))),
        "save" => Ok(Command::Save),
        "delete" => {
            let arg = rest.trim();
            if arg.is_empty() {
                Ok(Command::Delete(None))
            } else {
                Ok(Command::Delete(Some(arg.parse()?)))
            }
        }
        "list" => Ok(Command::List),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}
