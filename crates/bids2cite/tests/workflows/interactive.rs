use super::*;

#[tokio::test]
async fn test_prompts_fill_missing_values() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let interaction = Scripted::new([
    "Resting state fMRI",
    "fMRI, resting state,",
    "Bob, van der  Bob",
    "0000-0002-9120-8098",
    "",
    "https://pubmed.ncbi.nlm.nih.gov/27326542/",
    "",
    "PDDL-1.0",
  ]);

  let report = cite(&interaction, &ganz_lookup(), CiteOptions::new(&bids_dir)).await?;

  assert_eq!(interaction.remaining(), 0);
  assert_eq!(report.record.description, "Resting state fMRI");
  assert_eq!(report.record.keywords, ["fMRI", "resting state"]);
  assert_eq!(report.record.authors.len(), 2);
  assert_eq!(report.record.authors[0], Author::new("Bob", "van der Bob"));
  assert_eq!(report.record.authors[1].lastname, "Ganz");
  assert_eq!(report.record.references, ["pmid:27326542"]);
  assert_eq!(report.record.license.url, License::Pddl.url());
  Ok(())
}

#[tokio::test]
async fn test_unresolved_orcid_can_be_named() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  let interaction = Scripted::new(["n", "Jane Doe"]);
  let options = CiteOptions::new(&bids_dir)
    .with_description("")
    .with_keywords(["EEG"])
    .with_authors(["0000-0000-0000-0000"])
    .with_references(Vec::<String>::new())
    .with_license(License::Cc0);

  let report = cite(&interaction, &ganz_lookup(), options).await?;

  assert_eq!(report.record.authors, vec![Author {
    firstname:   "Jane".into(),
    lastname:    "Doe".into(),
    id:          Some("ORCID:0000-0000-0000-0000".into()),
    affiliation: None,
  }]);
  assert!(interaction.replies().iter().any(|r| r == "Could not resolve ORCID 0000-0000-0000-0000"));
  Ok(())
}

#[tokio::test]
async fn test_overwrite_is_reported() -> TestResult<()> {
  let (_dir, bids_dir) = create_test_dataset();
  std::fs::write(bids_dir.join("LICENSE"), "All rights reserved")?;
  let interaction = Scripted::default();
  let options = CiteOptions::new(&bids_dir)
    .with_description("")
    .with_keywords(["EEG"])
    .with_authors(Vec::<String>::new())
    .with_references(Vec::<String>::new())
    .with_license(License::Cc0);

  cite(&interaction, &ganz_lookup(), options).await?;

  assert!(interaction.replies().iter().any(|r| r == "Overwriting existing LICENSE"));
  assert_eq!(std::fs::read_to_string(bids_dir.join("LICENSE"))?, License::Cc0.text());
  Ok(())
}
