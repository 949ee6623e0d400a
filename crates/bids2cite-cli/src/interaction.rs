//! Terminal prompts for interactive runs.

use bids2cite::{
  error::{Bids2CiteError, Result},
  interaction::{format_response, prompt_format, ResponseContent, UserInteraction},
};
use dialoguer::{Confirm, Input, Select};

/// Asks questions on the attached terminal with `dialoguer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

/// Wraps a prompt failure into the library error.
fn interaction_error(e: dialoguer::Error) -> Bids2CiteError { Bids2CiteError::Interaction(e.to_string()) }

impl UserInteraction for Terminal {
  fn confirm(&self, message: &str, default: bool) -> Result<bool> {
    Confirm::new()
      .with_prompt(prompt_format(message))
      .default(default)
      .wait_for_newline(true)
      .interact()
      .map_err(interaction_error)
  }

  fn prompt(&self, message: &str, default: &str) -> Result<String> {
    Input::<String>::new()
      .with_prompt(prompt_format(message))
      .default(default.to_string())
      .show_default(!default.is_empty())
      .allow_empty(true)
      .interact_text()
      .map_err(interaction_error)
  }

  fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
    Select::new()
      .with_prompt(prompt_format(message))
      .items(items)
      .default(default)
      .interact()
      .map_err(interaction_error)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    println!("{}", format_response(content));
    Ok(())
  }
}
