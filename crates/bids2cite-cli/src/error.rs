//! Errors surfaced by the command line tool.

use bids2cite::error::Bids2CiteError;
use thiserror::Error;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, CliError>;

/// Everything that can end a run early.
#[derive(Error, Debug)]
pub enum CliError {
  /// An error from the library, including a missing dataset directory.
  #[error(transparent)]
  Bids2Cite(#[from] Bids2CiteError),

  /// Reading an input file given on the command line failed.
  #[error("Could not read {path}: {source}")]
  Input {
    /// The file that was given
    path:   String,
    /// What went wrong
    source: std::io::Error,
  },
}
