//! Citation metadata for BIDS datasets.
//!
//! `bids2cite` adds the files a BIDS dataset needs to be citable:
//!
//! - a `datacite.yml` citation record in the GIN DataCite layout
//! - a `LICENSE` file chosen from a small set of open data licenses
//! - a `.bidsignore` entry so validators skip the generated record
//!
//! Authors can be given as free text (`"Jane van Doe"`, `"Jane, van Doe"`) or as ORCID
//! identifiers, which are resolved against the ORCID public registry. References are normalized
//! to a canonical `scheme:value` form (`doi:10.1000/xyz`, `pmid:12345`).
//!
//! # Getting Started
//!
//! ```no_run
//! use bids2cite::{
//!   cite::{cite, CiteOptions},
//!   interaction::AcceptDefaults,
//!   orcid::OrcidClient,
//!   prelude::*,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Bids2CiteError> {
//!   let options = CiteOptions::new("path/to/bids")
//!     .with_description("Resting state fMRI in 20 participants")
//!     .with_keywords(["fMRI", "resting state"])
//!     .with_authors(["Jane van Doe", "0000-0002-9120-8098"]);
//!
//!   let report = cite(&AcceptDefaults, &OrcidClient::default(), options).await?;
//!   println!("Wrote {}", report.datacite.display());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`reference`]: canonical reference identifiers
//! - [`author`]: author parsing and resolution
//! - [`orcid`]: the ORCID lookup seam and its HTTP client
//! - [`bidsignore`]: idempotent `.bidsignore` updates
//! - [`license`]: license templates
//! - [`datacite`]: the citation record written to the dataset
//! - [`interaction`]: prompting and display
//! - [`cite`]: the end to end procedure
//! - [`config`]: optional user configuration

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod author;
pub mod bidsignore;
pub mod cite;
pub mod config;
pub mod datacite;
pub mod error;
pub mod interaction;
pub mod license;
pub mod orcid;
pub mod reference;

use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use bids2cite::prelude::*;
///
/// fn example() -> Result<(), Bids2CiteError> {
///   let license: License = "cc-by-4.0".parse()?;
///   assert_eq!(license.spdx(), "CC-BY-4.0");
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::Bids2CiteError, interaction::UserInteraction, license::License, orcid::OrcidLookup,
  };
}
