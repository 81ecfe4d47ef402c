//! Terminal front end for one in-memory note session.
//!
//! # Responsibility
//! - Read one command per line from stdin and print the redrawn view.
//! - Configure file logging from `SIDENOTE_LOG_DIR` / `SIDENOTE_LOG_LEVEL`.
//!
//! Notes live only for the lifetime of the process.

mod command;
mod render;
mod session;

use command::{parse_command, CommandParseError};
use log::info;
use session::{Reply, Session};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    if let Err(err) = sidenote_core::init_logging_from_env() {
        eprintln!("logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        sidenote_core::core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();
    run(&mut session, stdin.lock(), stdout.lock())?;

    info!(
        "event=cli_exit module=cli status=ok notes={}",
        session.store().len()
    );
    Ok(())
}

/// Drives `session` until `quit` or end of input.
///
/// Lines are decoded lossily; invalid UTF-8 never ends the session.
fn run(session: &mut Session, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "sidenote {} (type `help`)", sidenote_core::core_version())?;
    write!(output, "> ")?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match parse_command(&line) {
            Ok(command) => match session.handle(command) {
                Reply::Print(text) => write!(output, "{text}")?,
                Reply::Quit => break,
            },
            Err(CommandParseError::Empty) => {}
            Err(err) => writeln!(output, "error: {err}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }
    Ok(())
}
