//! Terminal shell for the contacts store.
//!
//! # Responsibility
//! - Parse startup configuration and initialize core logging.
//! - Construct one store for the session and drive it from stdin.

mod command;
mod render;
mod session;

use clap::Parser;
use contacts_core::{
    default_log_level, init_logging, load_contacts, sample_contacts, Contact, ContactStore,
    DatasetResult,
};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "contacts", version, about = "Browse and curate a contact list")]
struct Args {
    /// JSON dataset of contacts; the bundled sample is used when omitted.
    #[arg(long, value_name = "PATH")]
    dataset: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    /// Seed for reproducible random draws.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("contacts: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let dataset = load_dataset(args.dataset.as_ref())?;
    let mut store = match args.seed {
        Some(seed) => ContactStore::with_seed(dataset, seed),
        None => ContactStore::new(dataset),
    };
    store.subscribe(|event| {
        if let Some(notice) = event.notice() {
            eprintln!("{notice}");
        }
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session::run_session(&mut store, stdin.lock(), &mut stdout)?;
    log::info!("event=session_end module=cli status=ok");
    Ok(())
}

fn load_dataset(path: Option<&PathBuf>) -> DatasetResult<Vec<Contact>> {
    match path {
        Some(path) => load_contacts(path),
        None => sample_contacts(),
    }
}
