//! Command line interface for adding citation metadata to BIDS datasets.
//!
//! Writes `datacite.yml` and `LICENSE` into the dataset and makes sure `.bidsignore` hides the
//! citation record from the BIDS validator. Anything not given as an option is asked for
//! interactively, unless `--skip-prompt` is set.
//!
//! # Usage
//!
//! ```bash
//! # Answer everything interactively
//! bids2cite path/to/bids
//!
//! # Scripted, authors given as names or ORCID identifiers
//! bids2cite path/to/bids \
//!   --description "Resting state fMRI in 20 participants" \
//!   --keywords fMRI,rest \
//!   --authors "Jane van Doe" --authors 0000-0002-9120-8098 \
//!   --references https://doi.org/10.1038/sdata.2016.44 \
//!   --license CC-BY-4.0 \
//!   --skip-prompt
//! ```
//!
//! Logging goes to stderr and is controlled by `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use bids2cite::{
  cite::{cite, CiteOptions},
  config::Config,
  interaction::{AcceptDefaults, UserInteraction, ERROR_PREFIX},
  license::License,
  orcid::OrcidClient,
};
use clap::{builder::ArgAction, Parser};
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod error;
pub mod interaction;

use crate::{error::*, interaction::Terminal};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Add citation metadata to a BIDS dataset")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(short, long, action = ArgAction::Count, help = "Increase logging verbosity")]
  verbose: u8,

  /// Root of the BIDS dataset
  bids_dir: PathBuf,

  /// Free-text description of the dataset
  #[arg(long)]
  description: Option<String>,

  /// Keywords, comma separated or repeated
  #[arg(long, value_delimiter = ',')]
  keywords: Option<Vec<String>>,

  /// Author as "First Last", "First, Last" or an ORCID identifier. Repeat for more authors
  #[arg(long)]
  authors: Option<Vec<String>>,

  /// File with one author entry per line, lines starting with `#` are skipped
  #[arg(long, conflicts_with = "authors")]
  authors_file: Option<PathBuf>,

  /// Reference as a DOI, PubMed link or `scheme:id`. Repeat for more references
  #[arg(long)]
  references: Option<Vec<String>>,

  /// License for the data (CC0-1.0, CC-BY-4.0, PDDL-1.0, ODbL-1.0)
  #[arg(long)]
  license: Option<License>,

  /// Skip all prompts and use defaults for anything not given
  #[arg(long)]
  skip_prompt: bool,

  /// Configuration file. Defaults to the platform config directory
  #[arg(long)]
  config: Option<PathBuf>,

  /// Root of the ORCID public API, overriding the configuration
  #[arg(long)]
  orcid_api_url: Option<String>,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Reads author entries from a file, one per line.
fn read_authors_file(path: &Path) -> Result<Vec<String>> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| CliError::Input { path: path.display().to_string(), source })?;
  Ok(
    content
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty() && !line.starts_with('#'))
      .map(String::from)
      .collect(),
  )
}

/// Runs the tool for parsed arguments.
async fn run(cli: Cli) -> Result<()> {
  let mut config = Config::load_or_default(cli.config.as_deref())?;
  if let Some(url) = cli.orcid_api_url {
    config = config.with_orcid_api_url(url);
  }
  debug!("Using configuration {config:?}");

  let authors = match cli.authors_file {
    Some(path) => Some(read_authors_file(&path)?),
    None => cli.authors,
  };

  let options = CiteOptions {
    bids_dir: cli.bids_dir,
    description: cli.description,
    keywords: cli.keywords,
    authors,
    references: cli.references,
    license: cli.license,
    default_license: config.default_license,
  };

  let interaction: Box<dyn UserInteraction> =
    if cli.skip_prompt { Box::new(AcceptDefaults) } else { Box::new(Terminal) };
  let lookup = OrcidClient::new(config.orcid_api_url);

  cite(interaction.as_ref(), &lookup, options).await?;
  Ok(())
}

/// Entry point for the bids2cite CLI application
///
/// Parses arguments, sets up logging and runs the tool. Any error is printed to stderr and ends
/// the process with a non-zero exit code.
#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  if let Err(e) = run(cli).await {
    eprintln!("{} {}", style(ERROR_PREFIX).red(), e);
    std::process::exit(1);
  }
}
