//! Integration tests for pozos-graphs crate.
//!
//! These tests render the whole report into a temporary directory and decode
//! every file back to check it is a valid PNG of the expected size.

use pozos_common::test_utils::{csv_fixtures, init_test_logging, write_file};
use pozos_common::PozosError;
use pozos_config::Config;
use pozos_data::Dataset;
use pozos_graphs::{FigureSize, GraphManager};
use std::path::Path;
use tempfile::tempdir;

fn report_config(output: &Path, dpi: u32) -> Config {
    let mut config = Config::default();
    config.output.directory = output.to_path_buf();
    config.graphs.dpi = dpi;
    config
}

fn expected_size(figure: FigureSize, dpi: u32) -> (u32, u32) {
    (
        (figure.width * f64::from(dpi)).round() as u32,
        (figure.height * f64::from(dpi)).round() as u32,
    )
}

#[tokio::test]
async fn test_full_report_writes_eight_valid_pngs() {
    init_test_logging();
    let dir = tempdir().unwrap();
    let csv = write_file(
        dir.path(),
        "produccion.csv",
        &csv_fixtures::generated_csv(&["Pozo Norte", "Pozo Sur", "Pozo Este"], 30),
    );
    let output = dir.path().join("salida");
    std::fs::create_dir(&output).unwrap();

    let dataset = Dataset::load(&csv).unwrap();
    let subset = dataset.filter_well("Pozo Norte");
    let manager = GraphManager::new(&report_config(&output, 50)).unwrap();

    let written = manager.generate_all(&dataset, &subset).await.unwrap();
    assert_eq!(written.len(), 8);

    for path in &written {
        assert!(path.starts_with(&output));
        assert!(std::fs::metadata(path).unwrap().len() > 0);

        let image = image::open(path).unwrap();
        let compact = ["produccion_vs_presion.png", "produccion_diaria_pozo_norte.png"]
            .iter()
            .any(|name| path.ends_with(name));
        let figure = if compact { FigureSize::COMPACT } else { FigureSize::WIDE };
        assert_eq!((image.width(), image.height()), expected_size(figure, 50));
    }
}

#[tokio::test]
async fn test_absent_well_still_renders() {
    let dir = tempdir().unwrap();
    let csv = write_file(dir.path(), "produccion.csv", &csv_fixtures::sample_csv());
    let output = dir.path().join("salida");
    std::fs::create_dir(&output).unwrap();

    let dataset = Dataset::load(&csv).unwrap();
    let subset = dataset.filter_well("Pozo Inexistente");
    assert!(subset.is_empty());

    let mut config = report_config(&output, 50);
    config.analysis.well_id = "Pozo Inexistente".to_string();
    let manager = GraphManager::new(&config).unwrap();

    let written = manager.generate_all(&dataset, &subset).await.unwrap();
    assert_eq!(written.len(), 8);
    assert!(written.iter().all(|path| image::open(path).is_ok()));
}

#[tokio::test]
async fn test_english_locale_renders() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out");
    let mut config = report_config(&output, 50);
    config.graphs.locale = "en-US".to_string();
    config.output.create_missing = true;

    let dataset = Dataset::default();
    let manager = GraphManager::new(&config).unwrap();
    let written = manager
        .generate_all(&dataset, &dataset.filter_well("Pozo Norte"))
        .await
        .unwrap();

    assert_eq!(written.len(), 8);
    assert!(output.is_dir());
}

#[tokio::test]
async fn test_missing_output_dir_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("salida");
    let dataset = Dataset::default();
    let manager = GraphManager::new(&report_config(&output, 50)).unwrap();

    let err = manager
        .generate_all(&dataset, &dataset.filter_well("Pozo Norte"))
        .await
        .unwrap_err();

    assert!(matches!(err, PozosError::OutputWrite { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
