//! Error types for the bids2cite library.
//!
//! Only a few things can really go wrong: the dataset directory is missing, a file can't be read
//! or written, or a configuration value doesn't parse. Malformed author or reference input is
//! never an error, and a failed ORCID lookup is reported as "no data" rather than a fault.
//!
//! # Examples
//!
//! ```no_run
//! use bids2cite::{
//!   cite::{cite, CiteOptions},
//!   error::Bids2CiteError,
//!   interaction::AcceptDefaults,
//!   orcid::StaticLookup,
//! };
//!
//! # async fn example() -> Result<(), Bids2CiteError> {
//! match cite(&AcceptDefaults, &StaticLookup::default(), CiteOptions::new("missing")).await {
//!   Err(Bids2CiteError::DirectoryNotFound(path)) => println!("No dataset at {}", path.display()),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(_) => println!("Success!"),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error type alias used for the [`bids2cite`](crate) crate.
pub type Result<T> = core::result::Result<T, Bids2CiteError>;

/// Errors that can occur while adding citation metadata to a dataset.
#[derive(Error, Debug)]
pub enum Bids2CiteError {
  /// The dataset path doesn't exist or isn't a directory.
  ///
  /// Raised before anything is written, so a failed run leaves the file system untouched.
  #[error("BIDS directory not found: {}", .0.display())]
  DirectoryNotFound(PathBuf),

  /// A file system operation failed.
  ///
  /// This covers reading `.bidsignore` or `dataset_description.json` and writing any of the
  /// generated files. Writes are not atomic across files.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// A request to the ORCID registry failed.
  ///
  /// The author resolver swallows this into an unresolved author; it only escapes when the
  /// lookup is called directly.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A JSON document couldn't be decoded.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// The citation record couldn't be serialized.
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),

  /// The configuration file isn't valid TOML or has unexpected fields.
  #[error(transparent)]
  Toml(#[from] toml::de::Error),

  /// The license identifier isn't one of the supported templates.
  ///
  /// The string parameter holds the identifier that was given.
  #[error("Unknown license \"{0}\", see `bids2cite::license::License`")]
  UnknownLicense(String),

  /// Prompting the user failed, e.g. because the terminal went away.
  #[error("Interaction failed: {0}")]
  Interaction(String),
}
