//! Interactive command loop over one contact store.
//!
//! # Invariants
//! - The store is re-rendered after every state-changing command.
//! - Parse errors are reported and never end the session.

use crate::command::{Command, HELP_TEXT};
use crate::render::render_store;
use contacts_core::{AddOutcome, ContactStore};
use rand::Rng;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Runs commands from `input` until `quit` or end of input.
pub fn run_session<R, I, W>(store: &mut ContactStore<R>, input: I, out: &mut W) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    render_store(store, out)?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => apply(store, command, out)?,
            Err(err) => writeln!(out, "error: {err}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    Ok(())
}

fn apply<R: Rng, W: Write>(
    store: &mut ContactStore<R>,
    command: Command,
    out: &mut W,
) -> io::Result<()> {
    let revision = store.revision();

    match command {
        Command::List => return render_store(store, out),
        Command::Help => return writeln!(out, "{HELP_TEXT}"),
        Command::Add => match store.add_random_contact() {
            AddOutcome::Added(contact) => writeln!(out, "added {}", contact.name)?,
            AddOutcome::ReserveExhausted => {}
        },
        Command::SortByName => store.sort_by_name(),
        Command::SortByPopularity => store.sort_by_popularity(),
        Command::Delete(id) => {
            if store.delete_contact(&id) == 0 {
                writeln!(out, "no visible contact with id {id}")?;
            }
        }
        Command::Quit => {}
    }

    if store.revision() != revision {
        render_store(store, out)?;
    }
    Ok(())
}
