use super::*;

#[traced_test]
#[tokio::test]
async fn test_main() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();

  let options =
    CiteOptions::new(&bids_dir).with_description("add something").with_keywords(["foo", "bar"]);
  let report = cite(&AcceptDefaults, &ganz_lookup(), options).await?;

  assert!(bids_dir.join(".bidsignore").exists());
  assert!(bids_dir.join("LICENSE").exists());
  assert!(bids_dir.join("datacite.yml").exists());
  assert_eq!(report.datacite, bids_dir.join("datacite.yml"));

  let record = read_datacite(&bids_dir);
  assert_eq!(record.title, "bids");
  assert_eq!(record.description, "add something");
  assert_eq!(record.keywords, ["foo", "bar"]);
  assert!(record.authors.is_empty());
  assert!(record.references.is_empty());
  assert_eq!(record.license.url, License::Cc0.url());
  assert_eq!(std::fs::read_to_string(bids_dir.join("LICENSE"))?, License::Cc0.text());
  Ok(())
}

#[tokio::test]
async fn test_rerun_is_consistent() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let options = || {
    CiteOptions::new(&bids_dir)
      .with_description("add something")
      .with_keywords(["foo", "bar"])
      .with_authors(["Bob van der Bob", "0000-0002-9120-8098"])
      .with_references(["https://doi.org/10.666"])
  };

  cite(&AcceptDefaults, &ganz_lookup(), options()).await?;
  let snapshot = |name: &str| std::fs::read_to_string(bids_dir.join(name)).unwrap();
  let first = [snapshot("datacite.yml"), snapshot("LICENSE"), snapshot(".bidsignore")];

  cite(&AcceptDefaults, &ganz_lookup(), options()).await?;
  let second = [snapshot("datacite.yml"), snapshot("LICENSE"), snapshot(".bidsignore")];

  assert_eq!(first, second);
  assert_eq!(second[2], "datacite.yml\n");
  Ok(())
}

#[tokio::test]
async fn test_authors_and_references() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let options = CiteOptions::new(&bids_dir)
    .with_description("Visual oddball task")
    .with_keywords(["EEG"])
    .with_authors(["  Bob  van der Bob  ", "0000-0002-9120-8098", "   "])
    .with_references(["pmid:1245  ", "ncbi.nlm.nih.gov/pubmed/568", "https://doi.org/10.666 "])
    .with_license(License::CcBy4);

  cite(&AcceptDefaults, &ganz_lookup(), options).await?;

  let record = read_datacite(&bids_dir);
  assert_eq!(record.authors, vec![Author::new("Bob", "van der Bob"), Author {
    firstname:   "Melanie".into(),
    lastname:    "Ganz".into(),
    id:          Some("ORCID:0000-0002-9120-8098".into()),
    affiliation: None,
  }]);
  assert_eq!(record.references, ["pmid:1245", "pmid:568", "doi:10.666"]);
  assert_eq!(record.license.name, License::CcBy4.name());
  Ok(())
}

#[tokio::test]
async fn test_title_from_dataset_description() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let description = r#"{"Name": "Visual oddball", "BIDSVersion": "1.8.0"}"#;
  std::fs::write(bids_dir.join("dataset_description.json"), description)?;

  let options = CiteOptions::new(&bids_dir).with_description("").with_keywords(["EEG"]);
  cite(&AcceptDefaults, &ganz_lookup(), options).await?;

  assert_eq!(read_datacite(&bids_dir).title, "Visual oddball");
  assert_eq!(std::fs::read_to_string(bids_dir.join("dataset_description.json"))?, description);
  Ok(())
}

#[tokio::test]
async fn test_keeps_user_bidsignore() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  std::fs::write(bids_dir.join(".bidsignore"), "extra/\n*.log\n")?;

  let options = CiteOptions::new(&bids_dir).with_description("").with_keywords(["EEG"]);
  cite(&AcceptDefaults, &ganz_lookup(), options).await?;

  assert_eq!(std::fs::read_to_string(bids_dir.join(".bidsignore"))?, "extra/\n*.log\ndatacite.yml\n");
  Ok(())
}

#[tokio::test]
async fn test_default_license_is_used_when_skipping() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let options = CiteOptions::new(&bids_dir)
    .with_description("")
    .with_keywords(["EEG"])
    .with_default_license(License::Odbl);

  let report = cite(&AcceptDefaults, &ganz_lookup(), options).await?;

  assert_eq!(report.record.license.url, License::Odbl.url());
  assert_eq!(std::fs::read_to_string(report.license)?, License::Odbl.text());
  Ok(())
}
