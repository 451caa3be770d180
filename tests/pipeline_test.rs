use std::io::Write;
use std::sync::Arc;

use museum_visitors::config::Config;
use museum_visitors::pipeline::{get_museum_dataset, make_predictions, AppContext};
use museum_visitors::resolver::ReferenceTable;
use museum_visitors::table::{BuilderSettings, StaticPageFetcher};
use museum_visitors::PipelineError;

const MUSEUMS_PAGE: &str = include_str!("fixtures/most_visited_museums.html");
const WORLD_CITIES: &str = include_str!("fixtures/worldcities_sample.csv");

fn reference_table() -> Arc<ReferenceTable> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/worldcities_sample.csv"
    );
    Arc::new(ReferenceTable::from_csv_path(path).expect("Failed to load reference table"))
}

fn context_for(html: &str) -> AppContext {
    AppContext::new(
        reference_table(),
        Arc::new(StaticPageFetcher::new(html)),
        BuilderSettings::default(),
        85,
    )
}

#[test]
fn test_reference_table_loads_sample() {
    let table = reference_table();
    assert_eq!(table.len(), 11);
}

#[test]
fn test_dataset_from_saved_page() {
    let dataset = get_museum_dataset(&context_for(MUSEUMS_PAGE)).expect("Pipeline should succeed");

    let names: Vec<&str> = dataset.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Louvre",
            "British Museum",
            "Tate Modern",
            "Metropolitan Museum of Art",
            "National Museum of Korea",
            "Musée d'Orsay",
            "Museo del Prado",
            "State Hermitage Museum",
        ]
    );

    // Vatican City's tiny population makes it the outlier
    assert!(dataset.iter().all(|r| r.name != "Vatican Museums"));
    // No population for Atlantis, no visitor count for the Capitoline
    assert!(dataset.iter().all(|r| r.name != "Museum of Atlantis"));
    assert!(dataset.iter().all(|r| r.name != "Capitoline Museums"));

    for record in dataset.iter() {
        assert!(record.visitors.is_finite());
        assert!(record.population > 0);
        assert!((record.ratio - record.visitors / record.population as f64).abs() < 1e-12);
    }
}

#[test]
fn test_enrichment_details() {
    let dataset = get_museum_dataset(&context_for(MUSEUMS_PAGE)).unwrap();
    let find = |name: &str| dataset.iter().find(|r| r.name == name).unwrap();

    // Footnote markers are stripped before parsing
    let louvre = find("Louvre");
    assert_eq!(louvre.visitors, 8_700_000.0);
    assert_eq!(louvre.country_code.as_deref(), Some("FR"));
    assert_eq!(louvre.population, 11_060_000);

    // Row-spanning city and country cells carry down
    let tate = find("Tate Modern");
    assert_eq!(tate.city, "London");
    assert_eq!(tate.country.as_deref(), Some("United Kingdom"));
    assert_eq!(tate.population, 11_262_000);

    // First comma segment, then a fuzzy match onto "New York"
    let met = find("Metropolitan Museum of Art");
    assert_eq!(met.city, "New York City");
    assert_eq!(met.country_code.as_deref(), Some("US"));
    assert_eq!(met.population, 18_908_608);

    let korea = find("National Museum of Korea");
    assert_eq!(korea.country_code.as_deref(), Some("KR"));

    let hermitage = find("State Hermitage Museum");
    assert_eq!(hermitage.visitors, 3_200_000.0);
    assert_eq!(hermitage.country_code.as_deref(), Some("RU"));
}

#[test]
fn test_runs_are_deterministic() {
    let ctx = context_for(MUSEUMS_PAGE);
    let first = get_museum_dataset(&ctx).unwrap();
    let second = get_museum_dataset(&ctx).unwrap();
    assert_eq!(first.records, second.records);
}

#[test]
fn test_predictions_from_saved_page() {
    let dataset = get_museum_dataset(&context_for(MUSEUMS_PAGE)).unwrap();
    let report = make_predictions(&dataset, "1000000,5000000,10000000").unwrap();

    assert_eq!(report.predictions.len(), 3);
    assert!(report.slope.is_finite());
    assert!(report.intercept.is_finite());
    assert!((0.0..=1.0).contains(&report.r2));
    for (population, predicted) in [1_000_000.0, 5_000_000.0, 10_000_000.0]
        .iter()
        .zip(&report.predictions)
    {
        let expected = report.slope * population + report.intercept;
        assert!((predicted - expected).abs() < 1e-6);
    }

    let err = make_predictions(&dataset, "1000000,lots").unwrap_err();
    assert!(matches!(err, PipelineError::InvalidPopulation(p) if p == "lots"));
}

#[test]
fn test_page_without_table() {
    let err = get_museum_dataset(&context_for("<html><body><p>Moved</p></body></html>")).unwrap_err();
    assert!(matches!(err, PipelineError::NoTable));
}

#[test]
fn test_page_where_nothing_resolves() {
    let html = r#"<table>
        <tr><th>Name</th><th>Visitors in 2024</th><th>City</th><th>Country</th></tr>
        <tr><td>Museum of Atlantis</td><td>1,000,000</td><td>Atlantis</td><td>Atlantis</td></tr>
        <tr><td>Nowhere Gallery</td><td>unknown</td><td>Paris</td><td>France</td></tr>
    </table>"#;
    let err = get_museum_dataset(&context_for(html)).unwrap_err();
    assert!(matches!(err, PipelineError::EmptyDataset));
}

#[test]
fn test_context_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("worldcities.csv");
    std::fs::write(&csv_path, WORLD_CITIES).unwrap();

    let config_path = dir.path().join("museums.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "reference_csv = {:?}", csv_path.display().to_string()).unwrap();
    writeln!(file, "fuzzy_threshold = 88").unwrap();
    drop(file);

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.fuzzy_threshold, 88);

    let ctx = AppContext::from_config(&config)
        .unwrap()
        .with_fetcher(Arc::new(StaticPageFetcher::new(MUSEUMS_PAGE)));
    assert_eq!(ctx.reference.len(), 11);

    let dataset = get_museum_dataset(&ctx).unwrap();
    assert_eq!(dataset.len(), 8);
}

#[test]
fn test_missing_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.reference_csv = dir.path().join("does_not_exist.csv");
    assert!(AppContext::from_config(&config).is_err());
}
