//! Prompting and display.
//!
//! Everything that talks to the user goes through [`UserInteraction`], so the procedure in
//! [`cite`](crate::cite) runs the same whether a person is answering questions in a terminal or a
//! script wants every default accepted. [`AcceptDefaults`] is the latter; the CLI provides a
//! terminal implementation.

use console::style;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Bullet for list items
pub static BULLET: &str = "•";

/// Something to show the user.
#[derive(Debug, Clone, Copy)]
pub enum ResponseContent<'a> {
  /// Progress or neutral information
  Info(&'a str),
  /// A step finished
  Success(&'a str),
  /// Something was skipped or degraded but the run continues
  Warning(&'a str),
  /// A titled list of items
  List {
    /// Line shown above the items
    title: &'a str,
    /// Items, one per line
    items: &'a [String],
  },
}

/// The capability to ask the user things and tell them what happened.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str, default: bool) -> Result<bool>;
  /// Asks for a line of text. An empty answer is returned as is.
  fn prompt(&self, message: &str, default: &str) -> Result<String>;
  /// Asks the user to pick one of `items`, returning its index.
  fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize>;
  /// Shows `content` to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Answers every question with its default and prints replies to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl UserInteraction for AcceptDefaults {
  fn confirm(&self, message: &str, default: bool) -> Result<bool> {
    trace!("Accepting default {default} for {message:?}");
    Ok(default)
  }

  fn prompt(&self, message: &str, default: &str) -> Result<String> {
    trace!("Accepting default {default:?} for {message:?}");
    Ok(default.to_string())
  }

  fn select(&self, message: &str, items: &[String], default: usize) -> Result<usize> {
    trace!("Accepting default {:?} for {message:?}", items.get(default));
    Ok(default)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    println!("{}", format_response(content));
    Ok(())
  }
}

/// Renders a prompt message the way every prompt in the CLI looks.
pub fn prompt_format(message: &str) -> String { style(message).bold().to_string() }

/// Renders a titled bullet list.
///
/// ```
/// use bids2cite::interaction::unordered_list;
///
/// let list = unordered_list("Keywords", &["fMRI".to_string(), "EEG".to_string()]);
/// assert!(list.contains("fMRI"));
/// assert_eq!(list.lines().count(), 3);
/// ```
pub fn unordered_list(title: &str, items: &[String]) -> String {
  let mut out = style(title).bold().to_string();
  for item in items {
    out.push_str(&format!("\n  {} {}", style(BULLET).cyan(), item));
  }
  out
}

/// Renders a reply with its styled prefix.
pub fn format_response(content: ResponseContent) -> String {
  match content {
    ResponseContent::Info(msg) => format!("{} {}", style(INFO_PREFIX).blue(), msg),
    ResponseContent::Success(msg) => format!("{} {}", style(SUCCESS_PREFIX).green(), msg),
    ResponseContent::Warning(msg) => format!("{} {}", style(WARNING_PREFIX).yellow(), msg),
    ResponseContent::List { title, items } => unordered_list(title, items),
  }
}
