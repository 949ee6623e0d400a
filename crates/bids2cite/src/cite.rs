//! Adding citation metadata to a dataset, end to end.
//!
//! [`cite`] gathers whatever [`CiteOptions`] leaves open through a [`UserInteraction`], resolves
//! authors and references, and writes `datacite.yml`, `LICENSE` and `.bidsignore` into the
//! dataset. With [`AcceptDefaults`](crate::interaction::AcceptDefaults) nothing is asked and every
//! missing value falls back to an empty one or the default license.

use crate::{
  author::{parse_author_name, resolve_author, Author, AuthorResolution, ORCID_PREFIX},
  bidsignore::update_bidsignore,
  datacite::{dataset_title, DataCite, DATACITE_FILENAME},
  interaction::{ResponseContent, UserInteraction},
  license::{write_license, License, LICENSE_FILENAME},
  orcid::OrcidLookup,
  reference::get_reference_id,
};

use super::*;

/// What to write into a dataset. Anything left as `None` is asked for.
#[derive(Debug, Clone, Default)]
pub struct CiteOptions {
  /// Root of the BIDS dataset
  pub bids_dir:        PathBuf,
  /// Free-text description of the dataset
  pub description:     Option<String>,
  /// Keywords
  pub keywords:        Option<Vec<String>>,
  /// Author entries, names or ORCID identifiers
  pub authors:         Option<Vec<String>>,
  /// References in any format [`get_reference_id`] understands
  pub references:      Option<Vec<String>>,
  /// License for the data
  pub license:         Option<License>,
  /// License preselected when asking
  pub default_license: License,
}

impl CiteOptions {
  /// Options for the dataset at `bids_dir` with nothing filled in.
  pub fn new(bids_dir: impl Into<PathBuf>) -> Self {
    Self { bids_dir: bids_dir.into(), ..Default::default() }
  }

  /// Sets the description.
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Sets the keywords.
  pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
    self.keywords = Some(keywords.into_iter().map(Into::into).collect());
    self
  }

  /// Sets the author entries.
  pub fn with_authors<S: Into<String>>(mut self, authors: impl IntoIterator<Item = S>) -> Self {
    self.authors = Some(authors.into_iter().map(Into::into).collect());
    self
  }

  /// Sets the references.
  pub fn with_references<S: Into<String>>(
    mut self,
    references: impl IntoIterator<Item = S>,
  ) -> Self {
    self.references = Some(references.into_iter().map(Into::into).collect());
    self
  }

  /// Sets the license.
  pub fn with_license(mut self, license: License) -> Self {
    self.license = Some(license);
    self
  }

  /// Sets the license preselected when asking.
  pub fn with_default_license(mut self, license: License) -> Self {
    self.default_license = license;
    self
  }
}

/// The files a run wrote, and the record that went into `datacite.yml`.
#[derive(Debug, Clone)]
pub struct CiteReport {
  /// Path of the citation record
  pub datacite:   PathBuf,
  /// Path of the license file
  pub license:    PathBuf,
  /// Path of the ignore list
  pub bidsignore: PathBuf,
  /// The citation record as written
  pub record:     DataCite,
}

/// Adds citation metadata to the dataset described by `options`.
///
/// Fails with [`Bids2CiteError::DirectoryNotFound`] before touching anything when the dataset
/// directory is missing. Existing `datacite.yml` and `LICENSE` files are replaced. The three
/// files are written one after another, so a write failure can leave the earlier ones updated.
pub async fn cite<I, L>(interaction: &I, lookup: &L, options: CiteOptions) -> Result<CiteReport>
where
  I: UserInteraction + ?Sized,
  L: OrcidLookup + ?Sized, {
  let CiteOptions { bids_dir, description, keywords, authors, references, license, default_license } =
    options;

  if !bids_dir.is_dir() {
    return Err(Bids2CiteError::DirectoryNotFound(bids_dir));
  }
  debug!("Adding citation metadata to {bids_dir:?}");

  let description = match description {
    Some(description) => description,
    None => interaction.prompt("Description of the dataset", "")?,
  };

  let keywords = match keywords {
    Some(keywords) => clean_entries(keywords),
    None => split_list(&interaction.prompt("Keywords (comma separated)", "")?),
  };

  let author_entries = match authors {
    Some(authors) => clean_entries(authors),
    None => collect_entries(interaction, "Author, as a name or an ORCID (empty to finish)")?,
  };

  let reference_entries = match references {
    Some(references) => clean_entries(references),
    None => collect_entries(interaction, "Reference, as a DOI or PubMed link (empty to finish)")?,
  };

  let license = match license {
    Some(license) => license,
    None => choose_license(interaction, default_license)?,
  };

  let mut authors = Vec::with_capacity(author_entries.len());
  for entry in &author_entries {
    authors.push(resolve(interaction, lookup, entry).await?);
  }

  let mut references: Vec<String> = Vec::new();
  for reference in reference_entries.iter().map(|r| get_reference_id(r)) {
    if !reference.is_empty() && !references.contains(&reference) {
      references.push(reference);
    }
  }

  for existing in [DATACITE_FILENAME, LICENSE_FILENAME] {
    if bids_dir.join(existing).exists() {
      interaction.reply(ResponseContent::Warning(&format!("Overwriting existing {existing}")))?;
    }
  }

  let record = DataCite::new(dataset_title(&bids_dir), license)
    .with_description(description)
    .with_keywords(keywords)
    .with_authors(authors)
    .with_references(references);

  let datacite = record.write(&bids_dir)?;
  let license_path = write_license(&bids_dir, license)?;
  let bidsignore = update_bidsignore(&bids_dir)?;

  let authors = record.authors.iter().map(ToString::to_string).collect::<Vec<_>>();
  interaction.reply(ResponseContent::List { title: "Authors", items: &authors })?;
  interaction.reply(ResponseContent::List { title: "References", items: &record.references })?;
  interaction.reply(ResponseContent::Success(&format!(
    "Citation metadata written to {}",
    bids_dir.display()
  )))?;

  Ok(CiteReport { datacite, license: license_path, bidsignore, record })
}

/// Resolves one author entry, asking what to do with ORCID identifiers that can't be found.
///
/// An unresolved identifier is kept as an author with only its `id` unless the user chooses to
/// type a name for it instead.
async fn resolve<I, L>(interaction: &I, lookup: &L, entry: &str) -> Result<Author>
where
  I: UserInteraction + ?Sized,
  L: OrcidLookup + ?Sized, {
  match resolve_author(lookup, entry).await {
    AuthorResolution::Parsed(author) | AuthorResolution::Resolved(author) => Ok(author),
    AuthorResolution::Unresolved { orcid } => {
      interaction.reply(ResponseContent::Warning(&format!("Could not resolve ORCID {orcid}")))?;
      let id = Some(format!("{ORCID_PREFIX}{orcid}"));
      if interaction.confirm(&format!("Keep {orcid} without a name?"), true)? {
        return Ok(Author { id, ..Default::default() });
      }
      let name = interaction.prompt(&format!("Name for {orcid}"), "")?;
      Ok(Author { id, ..parse_author_name(&name) })
    },
  }
}

/// Asks for entries one at a time until an empty answer.
fn collect_entries<I: UserInteraction + ?Sized>(interaction: &I, message: &str) -> Result<Vec<String>> {
  let mut entries = Vec::new();
  loop {
    let entry = interaction.prompt(message, "")?;
    let entry = entry.trim();
    if entry.is_empty() {
      return Ok(entries);
    }
    entries.push(entry.to_string());
  }
}

/// Lets the user pick a license, with `default` preselected.
fn choose_license<I: UserInteraction + ?Sized>(interaction: &I, default: License) -> Result<License> {
  let items =
    License::ALL.iter().map(|l| format!("{} ({})", l.spdx(), l.name())).collect::<Vec<_>>();
  let default_index = License::ALL.iter().position(|l| *l == default).unwrap_or_default();
  let index = interaction.select("License", &items, default_index)?;
  License::ALL.get(index).copied().ok_or_else(|| {
    Bids2CiteError::Interaction(format!("License choice {index} is out of range"))
  })
}

/// Splits a comma separated answer into trimmed, non-empty entries.
fn split_list(answer: &str) -> Vec<String> { clean_entries(answer.split(',').map(String::from)) }

/// Trims entries and drops empty ones.
fn clean_entries(entries: impl IntoIterator<Item = String>) -> Vec<String> {
  entries.into_iter().map(|e| e.trim().to_string()).filter(|e| !e.is_empty()).collect()
}
