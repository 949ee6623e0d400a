//! The citation record written to a dataset.
//!
//! The record follows the `datacite.yml` layout understood by the G-Node Infrastructure (GIN),
//! which mints DOIs for datasets straight from that file:
//!
//! ```yaml
//! authors:
//! - firstname: Melanie
//!   lastname: Ganz
//!   id: ORCID:0000-0002-9120-8098
//! title: My dataset
//! description: Resting state fMRI in 20 participants
//! keywords:
//! - fMRI
//! license:
//!   name: Creative Commons CC0 1.0 Public Domain Dedication
//!   url: https://creativecommons.org/publicdomain/zero/1.0/
//! funding: []
//! references:
//! - doi:10.1038/sdata.2016.44
//! resourcetype: Dataset
//! templateversion: 1.2
//! ```

use crate::{author::Author, license::License};

use super::*;

/// File name of the citation record inside a dataset.
pub const DATACITE_FILENAME: &str = "datacite.yml";

/// BIDS file holding the dataset's own metadata. Only ever read.
pub const DATASET_DESCRIPTION: &str = "dataset_description.json";

/// Resource type GIN expects for datasets.
pub const RESOURCE_TYPE: &str = "Dataset";

/// Version of the GIN `datacite.yml` template this record follows.
pub const TEMPLATE_VERSION: f64 = 1.2;

/// License entry of the citation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseInfo {
  /// Full license name
  pub name: String,
  /// Link to the license deed
  pub url:  String,
}

impl From<License> for LicenseInfo {
  fn from(license: License) -> Self {
    Self { name: license.name().to_string(), url: license.url().to_string() }
  }
}

/// A complete citation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCite {
  /// Dataset authors in citation order
  pub authors:         Vec<Author>,
  /// Dataset title
  pub title:           String,
  /// Free-text description
  pub description:     String,
  /// Keywords in the order given
  pub keywords:        Vec<String>,
  /// License the data is shared under
  pub license:         LicenseInfo,
  /// Funding statements
  #[serde(default)]
  pub funding:         Vec<String>,
  /// Canonical reference identifiers, see [`reference::get_reference_id`]
  pub references:      Vec<String>,
  /// Always [`RESOURCE_TYPE`]
  pub resourcetype:    String,
  /// Always [`TEMPLATE_VERSION`]
  pub templateversion: f64,
}

impl DataCite {
  /// Creates a record with the fixed fields filled in and everything else empty.
  pub fn new(title: impl Into<String>, license: License) -> Self {
    Self {
      authors:         Vec::new(),
      title:           title.into(),
      description:     String::new(),
      keywords:        Vec::new(),
      license:         license.into(),
      funding:         Vec::new(),
      references:      Vec::new(),
      resourcetype:    RESOURCE_TYPE.to_string(),
      templateversion: TEMPLATE_VERSION,
    }
  }

  /// Sets the description.
  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  /// Sets the keywords.
  pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
    self.keywords = keywords;
    self
  }

  /// Sets the authors.
  pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
    self.authors = authors;
    self
  }

  /// Sets the references.
  pub fn with_references(mut self, references: Vec<String>) -> Self {
    self.references = references;
    self
  }

  /// Serializes the record to YAML.
  pub fn to_yaml(&self) -> Result<String> { Ok(serde_yaml::to_string(self)?) }

  /// Writes the record to `bids_dir/datacite.yml`, replacing any existing file.
  pub fn write(&self, bids_dir: &Path) -> Result<PathBuf> {
    let path = bids_dir.join(DATACITE_FILENAME);
    debug!("Writing citation record to {path:?}");
    std::fs::write(&path, self.to_yaml()?)?;
    Ok(path)
  }
}

/// Picks a title for the dataset.
///
/// Uses the `Name` field of `dataset_description.json` when the file exists and has one, and the
/// directory name otherwise. An unreadable description file is logged and skipped.
pub fn dataset_title(bids_dir: &Path) -> String {
  let description = bids_dir.join(DATASET_DESCRIPTION);
  if description.exists() {
    match read_dataset_name(&description) {
      Ok(Some(name)) => return name,
      Ok(None) => debug!("No Name in {description:?}"),
      Err(e) => warn!("Could not read {description:?}: {e}"),
    }
  }

  bids_dir
    .canonicalize()
    .ok()
    .as_deref()
    .unwrap_or(bids_dir)
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_default()
}

/// Reads the `Name` field from a `dataset_description.json`.
fn read_dataset_name(path: &Path) -> Result<Option<String>> {
  let content = std::fs::read_to_string(path)?;
  let json: Value = serde_json::from_str(&content)?;
  Ok(
    json
      .get("Name")
      .and_then(Value::as_str)
      .map(str::trim)
      .filter(|name| !name.is_empty())
      .map(String::from),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record() -> DataCite {
    DataCite::new("ds000001", License::CcBy4)
      .with_description("add something")
      .with_keywords(vec!["foo".into(), "bar".into()])
      .with_authors(vec![Author::new("Bob", "van der Bob")])
      .with_references(vec!["doi:10.666".into()])
  }

  #[test]
  fn test_yaml_layout() {
    let yaml = record().to_yaml().unwrap();
    assert!(yaml.contains("- firstname: Bob\n  lastname: van der Bob\n"));
    assert!(yaml.contains("description: add something\n"));
    assert!(yaml.contains("keywords:\n- foo\n- bar\n"));
    assert!(yaml.contains("url: https://creativecommons.org/licenses/by/4.0/\n"));
    assert!(yaml.contains("resourcetype: Dataset\n"));
    assert!(yaml.contains("templateversion: 1.2\n"));
    assert!(!yaml.contains("affiliation"));
  }

  #[test]
  fn test_write_overwrites() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(DATACITE_FILENAME), "stale: true\n").unwrap();
    let path = record().write(dir.path()).unwrap();

    let written: DataCite = serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(written, record());
  }

  #[test]
  fn test_dataset_title_from_description() {
    let dir = tempdir().unwrap();
    std::fs::write(
      dir.path().join(DATASET_DESCRIPTION),
      r#"{"Name": "Visual oddball", "BIDSVersion": "1.8.0"}"#,
    )
    .unwrap();
    assert_eq!(dataset_title(dir.path()), "Visual oddball");
  }

  #[traced_test]
  #[test]
  fn test_dataset_title_falls_back_to_directory_name() {
    let dir = tempdir().unwrap();
    let bids_dir = dir.path().join("ds000117");
    std::fs::create_dir(&bids_dir).unwrap();
    assert_eq!(dataset_title(&bids_dir), "ds000117");

    std::fs::write(bids_dir.join(DATASET_DESCRIPTION), "{ not json").unwrap();
    assert_eq!(dataset_title(&bids_dir), "ds000117");
    assert!(logs_contain("Could not read"));
  }
}
