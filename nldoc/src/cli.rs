//! The command line interface for `nldoc`.

use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Parser, Default)]
#[clap(
    name = "nldoc",
    about = "Build an HTML reference page from the doc comments of a NetLogo model",
    version
)]
pub struct Command {
    /// Path to the model file to document, either a `.nlogo` container or
    /// plain NetLogo source. Asked for interactively when omitted.
    pub file: Option<PathBuf>,
}

impl Command {
    /// Returns the input path, prompting for one when none was given on
    /// the command line.
    pub fn input_path(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => {
                let response: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Please specify file name")
                    .interact_text()?;
                Ok(PathBuf::from(response))
            }
        }
    }
}
