//! Idempotent updates of a dataset's `.bidsignore`.
//!
//! The BIDS validator rejects files it doesn't know about, and `datacite.yml` is one of them.
//! [`update_bidsignore`] makes sure the patterns this crate is responsible for are listed,
//! leaving whatever the user already put in the file in place and in order.

use super::*;

/// File name of the ignore list inside a dataset.
pub const BIDSIGNORE: &str = ".bidsignore";

/// Patterns that must always be present after an update.
pub const REQUIRED_PATTERNS: &[&str] = &[datacite::DATACITE_FILENAME];

/// Merges two pattern lists, keeping order and dropping repeats.
///
/// Existing patterns keep their order and come first, followed by any required pattern that was
/// not already listed. Empty lines are dropped.
///
/// ```
/// use bids2cite::bidsignore::merge_patterns;
///
/// let merged = merge_patterns(["foo", "datacite.yml", "foo"], ["datacite.yml", "bar"]);
/// assert_eq!(merged, ["foo", "datacite.yml", "bar"]);
/// ```
pub fn merge_patterns<E, R>(existing: E, required: R) -> Vec<String>
where
  E: IntoIterator,
  E::Item: AsRef<str>,
  R: IntoIterator,
  R::Item: AsRef<str>, {
  let mut merged: Vec<String> = Vec::new();
  let existing = existing.into_iter().map(|p| p.as_ref().trim_end().to_string());
  let required = required.into_iter().map(|p| p.as_ref().trim_end().to_string());

  for pattern in existing.chain(required) {
    if !pattern.is_empty() && !merged.contains(&pattern) {
      merged.push(pattern);
    }
  }
  merged
}

/// Reads the patterns currently listed in `bids_dir/.bidsignore`.
///
/// A missing file is an empty list.
pub fn read_bidsignore(bids_dir: &Path) -> Result<Vec<String>> {
  let path = bids_dir.join(BIDSIGNORE);
  if !path.exists() {
    return Ok(Vec::new());
  }
  let content = std::fs::read_to_string(&path)?;
  Ok(content.lines().map(str::trim_end).filter(|l| !l.is_empty()).map(String::from).collect())
}

/// Makes sure `bids_dir/.bidsignore` lists every pattern in [`REQUIRED_PATTERNS`].
///
/// The file is rewritten with one pattern per line. Calling this repeatedly leaves the file
/// byte-for-byte unchanged after the first call.
pub fn update_bidsignore(bids_dir: &Path) -> Result<PathBuf> {
  let existing = read_bidsignore(bids_dir)?;
  let merged = merge_patterns(&existing, REQUIRED_PATTERNS);

  let path = bids_dir.join(BIDSIGNORE);
  debug!("Writing {} patterns to {path:?}", merged.len());
  let mut content = merged.join("\n");
  content.push('\n');
  std::fs::write(&path, content)?;
  Ok(path)
}
