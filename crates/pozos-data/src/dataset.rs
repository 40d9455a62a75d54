//! Loading the CSV export and selecting a single well.

use crate::record::{Column, WellRecord, REQUIRED_COLUMNS};
use pozos_common::{PozosError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// All records of the export, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<WellRecord>,
}

impl Dataset {
    /// Load the export at `path`.
    ///
    /// Fields are whitespace-trimmed and unknown columns are ignored. Empty
    /// numeric cells load as NaN. A missing file, a missing column or an
    /// unparsable field aborts the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PozosError::input_not_found(path));
        }

        debug!("Reading production data from {}", path.display());
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !headers.iter().any(|h| h == *required))
            .collect();
        if !missing.is_empty() {
            return Err(PozosError::schema_at_line(
                format!("missing column(s): {}", missing.join(", ")),
                1,
            ));
        }

        let records = reader
            .deserialize::<WellRecord>()
            .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

        let dataset = Self::from_records(records);
        info!(
            "Loaded {} records for {} wells from {}",
            dataset.len(),
            dataset.well_ids().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Build a dataset from already parsed records.
    pub fn from_records(records: Vec<WellRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WellRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct well ids in order of first appearance.
    pub fn well_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for record in &self.records {
            if !ids.contains(&record.well_id.as_str()) {
                ids.push(&record.well_id);
            }
        }
        ids
    }

    /// One numeric column across every record.
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// A column's values per well, wells in order of first appearance.
    pub fn group_by_well(&self, column: Column) -> Vec<(String, Vec<f64>)> {
        self.well_ids()
            .into_iter()
            .map(|id| {
                let values = self
                    .records
                    .iter()
                    .filter(|r| r.well_id == id)
                    .map(|r| r.value(column))
                    .collect();
                (id.to_string(), values)
            })
            .collect()
    }

    /// Rows of `well_id` (exact match) ordered by day.
    ///
    /// An unknown well yields an empty subset.
    pub fn filter_well(&self, well_id: &str) -> WellSubset {
        let mut records: Vec<WellRecord> = self
            .records
            .iter()
            .filter(|r| r.well_id == well_id)
            .cloned()
            .collect();
        // stable: equal days keep file order
        records.sort_by_key(|r| r.day);

        if records.is_empty() {
            warn!("No records found for well '{}'", well_id);
        } else {
            debug!("Selected {} records for well '{}'", records.len(), well_id);
        }

        WellSubset {
            well_id: well_id.to_string(),
            records,
        }
    }
}

/// Rows of one well sorted ascending by day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WellSubset {
    pub well_id: String,
    pub records: Vec<WellRecord>,
}

impl WellSubset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn days(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.day).collect()
    }

    pub fn column(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pozos_common::test_utils::{create_temp_dir, csv_fixtures, write_file};

    fn sample() -> Dataset {
        let dir = create_temp_dir();
        let path = write_file(dir.path(), "pozos.csv", &csv_fixtures::sample_csv());
        Dataset::load(&path).unwrap()
    }

    #[test]
    fn test_load_sample() {
        let dataset = sample();
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.well_ids(), vec!["Pozo Norte", "Pozo Sur", "Pozo Este"]);
        assert_eq!(dataset.records()[0].wellhead_pressure, 2450.0);
    }

    #[test]
    fn test_filter_sorts_by_day() {
        let subset = sample().filter_well("Pozo Norte");
        assert_eq!(subset.days(), vec![1, 2, 3, 4]);
        assert_eq!(
            subset.column(Column::OilProduction),
            vec![110.0, 115.0, 120.5, 125.0]
        );
        assert!(subset.records.iter().all(|r| r.well_id == "Pozo Norte"));
    }

    #[test]
    fn test_filter_is_exact_match() {
        let dataset = sample();
        assert!(dataset.filter_well("pozo norte").is_empty());
        assert!(dataset.filter_well("Pozo").is_empty());
    }

    #[test]
    fn test_equal_days_keep_file_order() {
        let record = |day, oil| WellRecord {
            well_id: "A".to_string(),
            day,
            oil_production: oil,
            gas_production: 0.0,
            water_cut: 0.0,
            wellhead_pressure: 0.0,
            reservoir_temperature: 0.0,
        };
        let dataset = Dataset::from_records(vec![record(2, 1.0), record(1, 2.0), record(2, 3.0)]);

        let subset = dataset.filter_well("A");
        assert_eq!(subset.column(Column::OilProduction), vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_group_by_well_order() {
        let groups = sample().group_by_well(Column::OilProduction);
        let names: Vec<&str> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Pozo Norte", "Pozo Sur", "Pozo Este"]);
        assert_eq!(groups[1].1, vec![95.0, 97.5, 99.0]);
    }

    #[test]
    fn test_blank_numeric_cells_load_as_nan() {
        let dir = create_temp_dir();
        let path = write_file(dir.path(), "huecos.csv", &csv_fixtures::blank_cells_csv());

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 4);
        assert!(dataset.records()[0].water_cut.is_nan());
        assert!(dataset.records()[2].oil_production.is_nan());
        assert_eq!(dataset.records()[1].water_cut, 0.20);
    }

    #[test]
    fn test_trimmed_fields_and_extra_columns() {
        let dir = create_temp_dir();
        let csv = format!(
            "{},Operator\n Pozo Norte , 1 ,110.0,395.0,0.20,2500.0,88.2,PEMEX\n",
            csv_fixtures::HEADER
        );
        let path = write_file(dir.path(), "extra.csv", &csv);

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.records()[0].well_id, "Pozo Norte");
        assert_eq!(dataset.records()[0].day, 1);
    }
}
