//! License templates for datasets.
//!
//! A dataset gets exactly one `LICENSE` file, picked from a small set of open data licenses that
//! are common for shared neuroimaging data. Each variant knows its SPDX identifier, its full
//! name, where the legal code lives, and the notice written to the dataset.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr;
//!
//! use bids2cite::license::License;
//!
//! let license = License::from_str("cc-by-4.0").unwrap();
//! assert_eq!(license, License::CcBy4);
//! assert_eq!(license.url(), "https://creativecommons.org/licenses/by/4.0/");
//! ```

use super::*;

/// File name of the license inside a dataset.
pub const LICENSE_FILENAME: &str = "LICENSE";

/// Supported dataset licenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum License {
  /// Creative Commons public domain dedication
  #[default]
  Cc0,
  /// Creative Commons Attribution 4.0 International
  CcBy4,
  /// Open Data Commons Public Domain Dedication and License
  Pddl,
  /// Open Data Commons Open Database License
  Odbl,
}

impl License {
  /// Every supported license, in the order they are offered to the user.
  pub const ALL: [License; 4] = [License::Cc0, License::CcBy4, License::Pddl, License::Odbl];

  /// SPDX identifier, e.g. `CC0-1.0`.
  pub fn spdx(&self) -> &'static str {
    match self {
      License::Cc0 => "CC0-1.0",
      License::CcBy4 => "CC-BY-4.0",
      License::Pddl => "PDDL-1.0",
      License::Odbl => "ODbL-1.0",
    }
  }

  /// Human readable name, as used in the citation record.
  pub fn name(&self) -> &'static str {
    match self {
      License::Cc0 => "Creative Commons CC0 1.0 Public Domain Dedication",
      License::CcBy4 => "Creative Commons Attribution 4.0 International Public License",
      License::Pddl => "Open Data Commons Public Domain Dedication and License v1.0",
      License::Odbl => "Open Data Commons Open Database License v1.0",
    }
  }

  /// Canonical URL of the license deed.
  pub fn url(&self) -> &'static str {
    match self {
      License::Cc0 => "https://creativecommons.org/publicdomain/zero/1.0/",
      License::CcBy4 => "https://creativecommons.org/licenses/by/4.0/",
      License::Pddl => "https://opendatacommons.org/licenses/pddl/1-0/",
      License::Odbl => "https://opendatacommons.org/licenses/odbl/1-0/",
    }
  }

  /// The notice written to the dataset's `LICENSE` file.
  pub fn text(&self) -> &'static str {
    match self {
      License::Cc0 => include_str!("../templates/licenses/CC0-1.0.txt"),
      License::CcBy4 => include_str!("../templates/licenses/CC-BY-4.0.txt"),
      License::Pddl => include_str!("../templates/licenses/PDDL-1.0.txt"),
      License::Odbl => include_str!("../templates/licenses/ODbL-1.0.txt"),
    }
  }
}

impl Display for License {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.spdx())
  }
}

impl FromStr for License {
  type Err = Bids2CiteError;

  fn from_str(s: &str) -> Result<Self> {
    match &s.trim().to_lowercase() as &str {
      "cc0" | "cc0-1.0" => Ok(License::Cc0),
      "cc-by" | "cc-by-4.0" => Ok(License::CcBy4),
      "pddl" | "pddl-1.0" => Ok(License::Pddl),
      "odbl" | "odbl-1.0" => Ok(License::Odbl),
      _ => Err(Bids2CiteError::UnknownLicense(s.to_owned())),
    }
  }
}

impl TryFrom<String> for License {
  type Error = Bids2CiteError;

  fn try_from(value: String) -> Result<Self> { value.parse() }
}

impl From<License> for String {
  fn from(license: License) -> Self { license.spdx().to_string() }
}

/// Writes the notice for `license` to `bids_dir/LICENSE`, replacing any existing file.
pub fn write_license(bids_dir: &Path, license: License) -> Result<PathBuf> {
  let path = bids_dir.join(LICENSE_FILENAME);
  debug!("Writing {license} license to {path:?}");
  std::fs::write(&path, license.text())?;
  Ok(path)
}
