//! Greet command: a minimal prompt smoke test.

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

/// Prompt for a first and last name and echo them back.
#[derive(Args, Debug, Clone, Default)]
pub struct GreetCommand {}

impl GreetCommand {
    pub fn run(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let first: String = Input::with_theme(&theme)
            .with_prompt("First name")
            .interact_text()?;
        let last: String = Input::with_theme(&theme)
            .with_prompt("Last name")
            .interact_text()?;

        println!("{}", full_name(&first, &last));
        Ok(())
    }
}

pub fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
