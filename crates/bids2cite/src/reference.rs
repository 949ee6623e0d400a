//! Canonical reference identifiers.
//!
//! References arrive in whatever shape people paste them: resolver links, PubMed article URLs,
//! or already prefixed tokens. [`get_reference_id`] folds them into a single `scheme:value`
//! form so they can be deduplicated and written to the citation record.
//!
//! | input                                         | output               |
//! |-----------------------------------------------|----------------------|
//! | `https://doi.org/10.1038/sdata.2016.44`       | `doi:10.1038/sdata.2016.44` |
//! | `dx.doi.org/10.1038/sdata.2016.44`            | `doi:10.1038/sdata.2016.44` |
//! | `https://pubmed.ncbi.nlm.nih.gov/27326542/`   | `pmid:27326542`      |
//! | `ncbi.nlm.nih.gov/pubmed/27326542`            | `pmid:27326542`      |
//! | `  PMID:27326542 `                            | `pmid:27326542`      |
//! | `https://doi.org:443/10.1/x`                  | `doi:10.1/x`         |
//! | `10.1038/sdata.2016.44`                       | `doi:10.1038/sdata.2016.44` |
//! | anything else                                 | trimmed input        |

use url::Url;

use super::*;

lazy_static! {
  /// An explicit `scheme:value` token. The scheme is short and starts with a letter.
  static ref SCHEME_ID: Regex = Regex::new(r"^([A-Za-z][A-Za-z0-9]{0,15}):(.+)$").unwrap();

  /// Trailing numeric article id in a PubMed path.
  static ref PUBMED_ID: Regex = Regex::new(r"/(\d+)/?$").unwrap();

  /// A DOI without any prefix.
  static ref BARE_DOI: Regex = Regex::new(r"^10\.\d{4,9}/\S+$").unwrap();
}

/// Schemes normalized to lower case. Other `word:text` tokens are kept as written.
const KNOWN_SCHEMES: [&str; 4] = ["doi", "pmid", "pmcid", "arxiv"];

/// Hosts that resolve DOIs.
const DOI_HOSTS: [&str; 3] = ["doi.org", "dx.doi.org", "www.doi.org"];

/// Hosts that serve PubMed articles.
const PUBMED_HOSTS: [&str; 1] = ["pubmed.ncbi.nlm.nih.gov"];

/// Legacy NCBI hosts, which serve PubMed articles under a `/pubmed/` path.
const NCBI_HOSTS: [&str; 2] = ["ncbi.nlm.nih.gov", "www.ncbi.nlm.nih.gov"];

/// Converts a raw reference into its canonical `scheme:value` identifier.
///
/// Whitespace around the input is dropped. DOI resolver links become `doi:<path>` and PubMed
/// links become `pmid:<number>`, with or without an `http(s)://` prefix. Tokens that already
/// carry a known scheme (`doi`, `pmid`, `pmcid`, `arxiv`) get it lower-cased. Anything else is
/// returned trimmed but otherwise untouched.
///
/// The function is pure and idempotent.
///
/// # Examples
///
/// ```
/// use bids2cite::reference::get_reference_id;
///
/// assert_eq!(get_reference_id("https://doi.org/10.666 "), "doi:10.666");
/// assert_eq!(get_reference_id("ncbi.nlm.nih.gov/pubmed/568"), "pmid:568");
/// assert_eq!(get_reference_id("  doi:1245"), "doi:1245");
/// assert_eq!(get_reference_id("some free text"), "some free text");
/// ```
pub fn get_reference_id(raw: &str) -> String {
  let trimmed = raw.trim();

  if let Some(url) = parse_url(trimmed) {
    if let Some(id) = id_from_url(trimmed, &url) {
      debug!("Normalized reference URL {trimmed:?} to {id:?}");
      return id;
    }
  }

  if let Some(captures) = SCHEME_ID.captures(trimmed) {
    let scheme = captures[1].to_ascii_lowercase();
    let value = &captures[2];
    if KNOWN_SCHEMES.contains(&scheme.as_str()) && !value.starts_with("//") {
      return format!("{scheme}:{value}");
    }
  }

  if BARE_DOI.is_match(trimmed) {
    return format!("doi:{trimmed}");
  }

  trace!("Leaving unrecognized reference {trimmed:?} as is");
  trimmed.to_string()
}

/// Parses the input as a URL, allowing the `http(s)://` prefix to be left out.
///
/// A missing prefix is only assumed when the text before the first `/` looks like a host name,
/// so `scheme:value` tokens are never mistaken for URLs.
fn parse_url(input: &str) -> Option<Url> {
  if input.contains("://") {
    return Url::parse(input).ok();
  }
  let (host, _) = input.split_once('/')?;
  if host.contains('.') && !host.contains(':') && !host.contains(char::is_whitespace) {
    return Url::parse(&format!("https://{input}")).ok();
  }
  None
}

/// Extracts a canonical id from a DOI resolver or PubMed link, if the URL is one.
fn id_from_url(raw: &str, url: &Url) -> Option<String> {
  let host = url.host_str()?;

  if DOI_HOSTS.contains(&host) {
    let doi = suffix_after_host(raw, host)?;
    return (!doi.is_empty()).then(|| format!("doi:{doi}"));
  }

  let is_pubmed = PUBMED_HOSTS.contains(&host)
    || (NCBI_HOSTS.contains(&host) && url.path().contains("/pubmed/"));
  if is_pubmed {
    return PUBMED_ID.captures(url.path()).map(|cap| format!("pmid:{}", &cap[1]));
  }

  None
}

/// Returns the raw text after `host`, an optional `:<port>` and the following `/`.
///
/// The value is taken from the input rather than from [`Url::path`] so that it survives without
/// percent-encoding.
fn suffix_after_host<'a>(raw: &'a str, host: &str) -> Option<&'a str> {
  // ASCII lower-casing keeps byte offsets intact.
  let start = raw.to_ascii_lowercase().find(host)? + host.len();
  let rest = &raw[start..];
  let rest = match rest.strip_prefix(':') {
    Some(port) => port.trim_start_matches(|c: char| c.is_ascii_digit()),
    None => rest,
  };
  Some(rest.strip_prefix('/').unwrap_or(rest))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_reference_id() {
    for (reference, expected) in [
      ("pmid:1245  ", "pmid:1245"),
      ("  doi:1245", "doi:1245"),
      ("ncbi.nlm.nih.gov/pubmed/568", "pmid:568"),
      ("https://doi.org/10.666 ", "doi:10.666"),
    ] {
      assert_eq!(get_reference_id(reference), expected, "input: {reference:?}");
    }
  }

  #[test]
  fn test_doi_urls() {
    assert_eq!(
      get_reference_id("https://doi.org/10.1038/sdata.2016.44"),
      "doi:10.1038/sdata.2016.44"
    );
    assert_eq!(
      get_reference_id("http://dx.doi.org/10.1016/j.neuroimage.2019.116330"),
      "doi:10.1016/j.neuroimage.2019.116330"
    );
    assert_eq!(get_reference_id("doi.org/10.1002/hbm.25351"), "doi:10.1002/hbm.25351");
    assert_eq!(
      get_reference_id("https://doi.org/10.1002/(SICI)1097-0193(1999)8:2/3<80::AID-HBM2>3.0.CO;2-C"),
      "doi:10.1002/(SICI)1097-0193(1999)8:2/3<80::AID-HBM2>3.0.CO;2-C"
    );
    assert_eq!(get_reference_id("https://doi.org:443/10.1/x"), "doi:10.1/x");
    assert_eq!(get_reference_id("http://dx.doi.org:8080/10.1/x"), "doi:10.1/x");
  }

  #[test]
  fn test_pubmed_urls() {
    assert_eq!(get_reference_id("https://pubmed.ncbi.nlm.nih.gov/27326542/"), "pmid:27326542");
    assert_eq!(get_reference_id("https://www.ncbi.nlm.nih.gov/pubmed/27326542"), "pmid:27326542");
    assert_eq!(get_reference_id("pubmed.ncbi.nlm.nih.gov/27326542"), "pmid:27326542");
  }

  #[test]
  fn test_scheme_is_lowercased() {
    assert_eq!(get_reference_id("PMID:27326542"), "pmid:27326542");
    assert_eq!(get_reference_id("DOI:10.1038/ABC"), "doi:10.1038/ABC");
    assert_eq!(get_reference_id("arXiv:2101.00001"), "arxiv:2101.00001");
  }

  #[test]
  fn test_unknown_scheme_kept_as_written() {
    assert_eq!(get_reference_id("Note:see appendix"), "Note:see appendix");
    assert_eq!(get_reference_id(" ORCID:0000-0002-9120-8098 "), "ORCID:0000-0002-9120-8098");
  }

  #[test]
  fn test_bare_doi() {
    assert_eq!(get_reference_id("10.1038/sdata.2016.44"), "doi:10.1038/sdata.2016.44");
  }

  #[test]
  fn test_unrecognized_passthrough() {
    assert_eq!(get_reference_id("  https://example.com/paper/1  "), "https://example.com/paper/1");
    assert_eq!(get_reference_id("Gorgolewski et al. 2016"), "Gorgolewski et al. 2016");
    assert_eq!(get_reference_id("https://doi.org/"), "https://doi.org/");
    assert_eq!(get_reference_id("ncbi.nlm.nih.gov/gene/568"), "ncbi.nlm.nih.gov/gene/568");
    assert_eq!(get_reference_id(""), "");
  }

  #[test]
  fn test_idempotent() {
    for reference in [
      "pmid:1245  ",
      "  doi:1245",
      "ncbi.nlm.nih.gov/pubmed/568",
      "https://doi.org/10.666 ",
      "https://pubmed.ncbi.nlm.nih.gov/27326542/",
      "PMID:42",
      "https://doi.org:443/10.1/x",
      "Note:see appendix",
      "10.1038/sdata.2016.44",
      "https://example.com/paper/1",
      "free text",
    ] {
      let once = get_reference_id(reference);
      assert_eq!(get_reference_id(&once), once, "input: {reference:?}");
    }
  }
}
