//! Lookups against the ORCID registry.
//!
//! The author resolver only needs a key-value view of ORCID: identifier in, name and affiliation
//! out. [`OrcidLookup`] is that seam. [`OrcidClient`] talks to the public API over HTTP, while
//! [`StaticLookup`] answers from memory for tests and offline runs.
//!
//! # Examples
//!
//! ```no_run
//! use bids2cite::orcid::{OrcidClient, OrcidLookup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OrcidClient::default();
//! if let Some(record) = client.lookup("0000-0002-9120-8098").await? {
//!   println!("{} {}", record.given_names, record.family_name);
//! }
//! # Ok(())
//! # }
//! ```

use super::*;

/// Public ORCID API used when nothing else is configured.
pub const DEFAULT_ORCID_API_URL: &str = "https://pub.orcid.org/v3.0";

/// JSON path to the given names in an ORCID record.
const GIVEN_NAMES_PATH: &str = "person/name/given-names/value";
/// JSON path to the family name in an ORCID record.
const FAMILY_NAME_PATH: &str = "person/name/family-name/value";
/// JSON path to the organization of the first listed employment.
const AFFILIATION_PATH: &str =
  "activities-summary/employments/affiliation-group/0/summaries/0/employment-summary/organization/name";

/// The parts of a public ORCID record that end up in a citation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidRecord {
  /// Given names as registered
  pub given_names: String,
  /// Family name as registered
  pub family_name: String,
  /// Organization of the first listed employment, if any
  pub affiliation: Option<String>,
}

/// Resolves ORCID identifiers to researcher records.
///
/// `Ok(None)` means the registry has no usable record for the identifier. Errors are reserved
/// for transport failures, and callers in this crate treat both the same way.
#[async_trait]
pub trait OrcidLookup: Send + Sync {
  /// Looks up a single identifier, e.g. `0000-0002-9120-8098`.
  async fn lookup(&self, orcid_id: &str) -> Result<Option<OrcidRecord>>;
}

/// HTTP client for the ORCID public API.
#[derive(Debug, Clone)]
pub struct OrcidClient {
  /// Shared connection pool
  client:   reqwest::Client,
  /// API root, without a trailing slash
  base_url: String,
}

impl Default for OrcidClient {
  fn default() -> Self { Self::new(DEFAULT_ORCID_API_URL) }
}

impl OrcidClient {
  /// Creates a client for the API rooted at `base_url`.
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client: reqwest::Client::new(), base_url }
  }

  /// The API root this client queries.
  pub fn base_url(&self) -> &str { &self.base_url }
}

#[async_trait]
impl OrcidLookup for OrcidClient {
  async fn lookup(&self, orcid_id: &str) -> Result<Option<OrcidRecord>> {
    let url = format!("{}/{}/record", self.base_url, orcid_id);
    debug!("Fetching ORCID record via: {url}");

    let response =
      self.client.get(&url).header(reqwest::header::ACCEPT, "application/json").send().await?;

    if !response.status().is_success() {
      debug!("ORCID lookup for {orcid_id} returned {}", response.status());
      return Ok(None);
    }

    let data = response.bytes().await?;
    trace!("ORCID response: {}", String::from_utf8_lossy(&data));

    let json: Value = serde_json::from_slice(&data)?;
    Ok(parse_record(&json))
  }
}

/// Answers lookups from an in-memory table.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
  /// Records keyed by bare identifier
  records: BTreeMap<String, OrcidRecord>,
}

impl StaticLookup {
  /// Adds a record for `orcid_id`.
  pub fn with_record(mut self, orcid_id: impl Into<String>, record: OrcidRecord) -> Self {
    self.records.insert(orcid_id.into(), record);
    self
  }
}

#[async_trait]
impl OrcidLookup for StaticLookup {
  async fn lookup(&self, orcid_id: &str) -> Result<Option<OrcidRecord>> {
    Ok(self.records.get(orcid_id).cloned())
  }
}

/// Pulls names and affiliation out of a `/record` response.
///
/// Records without a family name are treated as missing, since they can't produce a usable
/// author entry. This is also what the registry's error payloads look like.
pub fn parse_record(json: &Value) -> Option<OrcidRecord> {
  let family_name = get_by_path(json, FAMILY_NAME_PATH)?;
  let given_names = get_by_path(json, GIVEN_NAMES_PATH).unwrap_or_default();
  let affiliation = get_by_path(json, AFFILIATION_PATH);
  Some(OrcidRecord { given_names, family_name, affiliation })
}

/// Walks a `/`-separated path of object keys and array indices down to a string leaf.
fn get_by_path(json: &Value, path: &str) -> Option<String> {
  let mut current = json;

  for part in path.split('/') {
    current = if let Ok(index) = part.parse::<usize>() {
      current.as_array()?.get(index)?
    } else {
      current.get(part)?
    };
  }

  current.as_str().map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}
