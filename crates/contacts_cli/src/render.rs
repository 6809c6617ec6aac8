//! Plain-text rendering of store state.

use contacts_core::{Contact, ContactStore};
use rand::Rng;
use std::io::{self, Write};

const NAME_WIDTH: usize = 24;

/// Writes the visible contacts as a table followed by a reserve summary.
pub fn render_store<R: Rng, W: Write>(store: &ContactStore<R>, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<36}  {:<width$}  {:>10}  {:<6}  {:<6}",
        "ID",
        "NAME",
        "POPULARITY",
        "OSCAR",
        "EMMY",
        width = NAME_WIDTH
    )?;
    for contact in store.visible() {
        render_contact(contact, out)?;
    }
    writeln!(
        out,
        "{} shown, {} in reserve",
        store.visible_len(),
        store.reserve_len()
    )
}

fn render_contact<W: Write>(contact: &Contact, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<36}  {:<width$}  {:>10.2}  {:<6}  {:<6}",
        contact.id,
        truncate(&contact.name, NAME_WIDTH),
        contact.popularity,
        award_mark(contact.won_oscar),
        award_mark(contact.won_emmy),
        width = NAME_WIDTH
    )
}

fn award_mark(won: bool) -> &'static str {
    if won {
        "yes"
    } else {
        ""
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('~');
    truncated
}
