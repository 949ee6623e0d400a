//! Optional user configuration.
//!
//! Nothing needs configuring for the common case. A TOML file can point the ORCID client at a
//! different API root (a sandbox or a mirror) and change which license is offered first:
//!
//! ```toml
//! orcid_api_url = "https://pub.sandbox.orcid.org/v3.0"
//! default_license = "CC-BY-4.0"
//! ```
//!
//! The file is looked up at [`Config::default_path`] unless a path is given explicitly.

use crate::{license::License, orcid::DEFAULT_ORCID_API_URL};

use super::*;

/// Settings that outlive a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Root of the ORCID public API
  pub orcid_api_url:   String,
  /// License used when none is given and prompts are skipped
  pub default_license: License,
}

impl Default for Config {
  fn default() -> Self {
    Self { orcid_api_url: DEFAULT_ORCID_API_URL.to_string(), default_license: License::default() }
  }
}

impl Config {
  /// Platform config location, e.g. `~/.config/bids2cite/config.toml` on Linux.
  pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bids2cite").join("config.toml"))
  }

  /// Reads a configuration file.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    debug!("Loaded configuration from {path:?}: {config:?}");
    Ok(config)
  }

  /// Reads `path` if given, otherwise the file at [`Config::default_path`] if it exists, otherwise
  /// falls back to defaults.
  ///
  /// An explicitly given path that can't be read is an error.
  pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
    if let Some(path) = path {
      return Self::load(path);
    }
    match Self::default_path() {
      Some(path) if path.exists() => Self::load(&path),
      _ => {
        trace!("No configuration file found, using defaults");
        Ok(Self::default())
      },
    }
  }

  /// Overrides the ORCID API root.
  pub fn with_orcid_api_url(mut self, url: impl Into<String>) -> Self {
    self.orcid_api_url = url.into();
    self
  }

  /// Overrides the default license.
  pub fn with_default_license(mut self, license: License) -> Self {
    self.default_license = license;
    self
  }
}
