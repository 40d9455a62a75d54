//! Integration tests for pozos-data crate.

use pozos_common::test_utils::{
    assert_approx_eq, create_temp_dir, csv_fixtures, init_test_logging, write_file,
};
use pozos_common::PozosError;
use pozos_data::*;

#[test]
fn test_missing_file_is_input_not_found() {
    let dir = create_temp_dir();
    let path = dir.path().join("entrada").join("produccion_petroleo_mexico.csv");

    let err = Dataset::load(&path).unwrap_err();
    assert!(matches!(err, PozosError::InputNotFound { path: ref p } if *p == path));
}

#[test]
fn test_missing_column_is_named() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::missing_pressure_csv());

    let err = Dataset::load(&path).unwrap_err();
    match err {
        PozosError::Schema { message, .. } => assert!(message.contains("Wellhead_Pressure")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_value_reports_line() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::malformed_day_csv());

    let err = Dataset::load(&path).unwrap_err();
    assert!(matches!(err, PozosError::Schema { line: Some(3), .. }), "{err:?}");
}

#[test]
fn test_pipeline_aggregates_are_reproducible() {
    init_test_logging();
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::sample_csv());

    let first = Dataset::load(&path).unwrap();
    let second = Dataset::load(&path).unwrap();
    assert_eq!(first, second);

    let means = mean_by_well(&first);
    let ids: Vec<&str> = means.iter().map(|m| m.well_id.as_str()).collect();
    assert_eq!(ids, vec!["Pozo Norte", "Pozo Sur", "Pozo Este"]);
    assert_approx_eq(means[0].mean, 117.625, 1e-9);
    assert_eq!(means, mean_by_well(&second));

    let norte = first.filter_well("Pozo Norte");
    let series = cumulative_production(&norte);
    assert_eq!(series.totals(), vec![110.0, 225.0, 345.5, 470.5]);

    let gas = kde_curve(&first.column(Column::GasProduction), 1000).unwrap();
    let gas_again = kde_curve(&second.column(Column::GasProduction), 1000).unwrap();
    assert_eq!(gas, gas_again);
}

#[test]
fn test_absent_well_is_empty_not_error() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::sample_csv());
    let dataset = Dataset::load(&path).unwrap();

    let subset = dataset.filter_well("Pozo Oeste");
    assert!(subset.is_empty());
    assert!(cumulative_production(&subset).is_empty());
    assert!(violin_stats(&subset.column(Column::WellheadPressure), 100).is_none());
}

#[test]
fn test_empty_export_loads() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &format!("{}\n", csv_fixtures::HEADER));

    let dataset = Dataset::load(&path).unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.well_ids().is_empty());
}

#[test]
fn test_blank_cells_do_not_abort_aggregation() {
    let dir = create_temp_dir();
    let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::blank_cells_csv());
    let dataset = Dataset::load(&path).unwrap();

    let means = mean_by_well(&dataset);
    assert_eq!(means.len(), 1);
    assert_approx_eq(means[0].mean, 350.0 / 3.0, 1e-9);

    let series = cumulative_production(&dataset.filter_well("Pozo Norte"));
    assert_eq!(series.points[1], (2, 225.0));
    assert!(series.points[2].1.is_nan());
    assert_eq!(series.points[3], (4, 350.0));

    let oil = kde_curve(&dataset.column(Column::OilProduction), 100).unwrap();
    assert!(oil.densities.iter().all(|d| d.is_finite()));
    let stats = violin_stats(&dataset.column(Column::WaterCut), 100).unwrap();
    assert_eq!((stats.min, stats.max), (0.20, 0.22));
}
