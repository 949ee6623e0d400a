//! Author parsing and resolution.
//!
//! An author entry is either an ORCID identifier or a free-text name. Identifiers are resolved
//! through an [`OrcidLookup`], names are split into first and last name with a simple rule:
//!
//! - with a comma, everything before the first comma is the first name and everything after it
//!   is the last name (`"Jane, van Doe"`)
//! - without one, the first word is the first name and the rest is the last name
//!   (`"Jane van Doe"`)
//!
//! Whitespace runs inside either part collapse to a single space.
//!
//! # Examples
//!
//! ```
//! use bids2cite::{author::parse_author, orcid::StaticLookup};
//!
//! # async fn example() {
//! let author = parse_author(&StaticLookup::default(), "  Bob  van der Bob  ").await;
//! assert_eq!(author.firstname, "Bob");
//! assert_eq!(author.lastname, "van der Bob");
//! # }
//! ```

use crate::orcid::{OrcidLookup, OrcidRecord};

use super::*;

lazy_static! {
  /// Four groups of four alphanumerics separated by hyphens.
  static ref ORCID_ID: Regex = Regex::new(r"^[0-9A-Za-z]{4}(?:-[0-9A-Za-z]{4}){3}$").unwrap();
}

/// Prefix used for ORCID identifiers in the citation record.
pub const ORCID_PREFIX: &str = "ORCID:";

/// A single dataset author as written to the citation record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
  /// Given name(s)
  pub firstname:   String,
  /// Family name, including particles like "van der"
  pub lastname:    String,
  /// `ORCID:` prefixed identifier, when the author was resolved through ORCID
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id:          Option<String>,
  /// Institutional affiliation
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub affiliation: Option<String>,
}

impl Author {
  /// Creates an author from name parts only.
  pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
    Self { firstname: firstname.into(), lastname: lastname.into(), ..Default::default() }
  }

  /// Builds the author for a resolved ORCID record.
  pub fn from_orcid(orcid_id: &str, record: OrcidRecord) -> Self {
    Self {
      firstname:   record.given_names,
      lastname:    record.family_name,
      id:          Some(format!("{ORCID_PREFIX}{orcid_id}")),
      affiliation: record.affiliation,
    }
  }

  /// Whether the author carries no information at all.
  pub fn is_empty(&self) -> bool {
    self.firstname.is_empty()
      && self.lastname.is_empty()
      && self.id.is_none()
      && self.affiliation.is_none()
  }
}

impl Display for Author {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = [self.firstname.as_str(), self.lastname.as_str()]
      .into_iter()
      .filter(|part| !part.is_empty())
      .collect::<Vec<_>>()
      .join(" ");
    match (&self.id, name.is_empty()) {
      (Some(id), true) => write!(f, "{id}"),
      (Some(id), false) => write!(f, "{name} ({id})"),
      (None, _) => write!(f, "{name}"),
    }
  }
}

/// How an author entry was turned into an [`Author`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorResolution {
  /// The entry was free text and got split into name parts.
  Parsed(Author),
  /// The entry was an ORCID identifier and the registry knew it.
  Resolved(Author),
  /// The entry looked like an ORCID identifier but the lookup came back empty or failed.
  Unresolved {
    /// The identifier as given, without prefix
    orcid: String,
  },
}

impl AuthorResolution {
  /// Collapses the resolution into an author, using an empty one for failed lookups.
  pub fn into_author(self) -> Author {
    match self {
      AuthorResolution::Parsed(author) | AuthorResolution::Resolved(author) => author,
      AuthorResolution::Unresolved { .. } => Author::default(),
    }
  }
}

/// Whether `entry` has the shape of an ORCID identifier.
pub fn is_orcid(entry: &str) -> bool { ORCID_ID.is_match(entry.trim()) }

/// Looks up `orcid_id` and builds the matching author.
///
/// Returns `None` when the identifier is malformed, when the registry has no record for it, or
/// when the lookup fails. Malformed identifiers never reach the lookup.
pub async fn get_author_info_from_orcid<L: OrcidLookup + ?Sized>(
  lookup: &L,
  orcid_id: &str,
) -> Option<Author> {
  let orcid_id = orcid_id.trim();
  if !is_orcid(orcid_id) {
    debug!("Not an ORCID identifier: {orcid_id:?}");
    return None;
  }

  match lookup.lookup(orcid_id).await {
    Ok(Some(record)) => Some(Author::from_orcid(orcid_id, record)),
    Ok(None) => {
      warn!("No ORCID record found for {orcid_id}");
      None
    },
    Err(e) => {
      warn!("ORCID lookup for {orcid_id} failed: {e}");
      None
    },
  }
}

/// Resolves an author entry, keeping track of how it was resolved.
pub async fn resolve_author<L: OrcidLookup + ?Sized>(lookup: &L, entry: &str) -> AuthorResolution {
  let entry = entry.trim();
  if is_orcid(entry) {
    return match get_author_info_from_orcid(lookup, entry).await {
      Some(author) => AuthorResolution::Resolved(author),
      None => AuthorResolution::Unresolved { orcid: entry.to_string() },
    };
  }
  AuthorResolution::Parsed(parse_author_name(entry))
}

/// Turns an author entry into an [`Author`].
///
/// ORCID identifiers are resolved through `lookup`; an identifier that can't be resolved yields
/// an empty author. Use [`resolve_author`] to tell that case apart.
pub async fn parse_author<L: OrcidLookup + ?Sized>(lookup: &L, entry: &str) -> Author {
  resolve_author(lookup, entry).await.into_author()
}

/// Splits a free-text name into first and last name.
///
/// Never fails; empty input gives empty names.
pub fn parse_author_name(entry: &str) -> Author {
  let entry = entry.trim();

  let (firstname, lastname) = match entry.split_once(',') {
    Some((first, rest)) => (collapse_whitespace(first), collapse_whitespace(rest)),
    None => {
      let mut words = entry.split_whitespace();
      let first = words.next().unwrap_or_default().to_string();
      (first, words.collect::<Vec<_>>().join(" "))
    },
  };

  Author::new(firstname, lastname)
}

/// Trims `s` and replaces every inner whitespace run with a single space.
fn collapse_whitespace(s: &str) -> String { s.split_whitespace().collect::<Vec<_>>().join(" ") }
