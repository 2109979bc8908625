//! Writes the `mergenote(1)` man page, to `mergenote.1` unless a path is given.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::CommandFactory;
use clap_mangen::Man;

use mergenote::cli::Cli;

fn main() -> anyhow::Result<()> {
    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("mergenote.1"));

    let mut page = Vec::new();
    Man::new(Cli::command().name("mergenote"))
        .render(&mut page)
        .context("Rendering man page")?;
    fs::write(&out, page).with_context(|| format!("Writing {}", out.display()))?;

    eprintln!("Generated man page at {}", out.display());
    Ok(())
}
