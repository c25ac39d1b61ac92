//! A command line tool that builds HTML documentation for NetLogo models.

use anyhow::Result;
use clap::Parser;
use nldoc::cli::Command;
use nldoc_tracing::{init_tracing_subscriber, println_error};

fn main() {
    init_tracing_subscriber(Default::default());
    if let Err(err) = run() {
        println_error(&format!("{err:?}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let command = Command::parse();
    let input = command.input_path()?;
    nldoc::build_docs(&input)?;
    Ok(())
}
