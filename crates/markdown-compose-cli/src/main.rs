use anyhow::{Context, Result};
use clap::Parser;
use markdown_compose::{Document, Session, DEFAULT_OUTPUT_PATH};
use std::io;

/// Build a Markdown document interactively and save it on `!done`.
///
/// The session is driven entirely through prompts on standard input;
/// there are no arguments beyond the conventional help/version flags.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut document = Document::new();
    let mut session = Session::new(&mut document, stdin.lock(), stdout.lock());

    session
        .run()
        .with_context(|| format!("unable to complete the session; {DEFAULT_OUTPUT_PATH} was not saved"))
}
