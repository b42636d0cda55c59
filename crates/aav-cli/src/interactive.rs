//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use std::io;

use aav_core::Prompter;
use dialoguer::{Confirm, MultiSelect, Select};

/// [`Prompter`] on the controlling terminal.
///
/// Escape or `q` cancels a prompt, which counts as an empty answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> io::Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|dialoguer::Error::IO(e)| e)
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Vec<usize>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }
        let chosen = MultiSelect::new()
            .with_prompt(format!("{prompt} (space to toggle, enter to confirm)"))
            .items(items)
            .interact_opt()
            .map_err(|dialoguer::Error::IO(e)| e)?;
        Ok(chosen.unwrap_or_default())
    }

    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact_opt()
            .map_err(|dialoguer::Error::IO(e)| e)?;
        Ok(answer.unwrap_or(false))
    }
}
