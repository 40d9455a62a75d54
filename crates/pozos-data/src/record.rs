//! One row of the production export.

use serde::{Deserialize, Deserializer, Serialize};

/// Daily measurements of a single well.
///
/// An empty numeric cell is read as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    #[serde(rename = "Well_ID")]
    pub well_id: String,
    #[serde(rename = "Day")]
    pub day: i64,
    /// Barrels.
    #[serde(rename = "Oil_Production", deserialize_with = "nan_if_empty")]
    pub oil_production: f64,
    /// Cubic feet.
    #[serde(rename = "Gas_Production", deserialize_with = "nan_if_empty")]
    pub gas_production: f64,
    #[serde(rename = "Water_Cut", deserialize_with = "nan_if_empty")]
    pub water_cut: f64,
    /// psi.
    #[serde(rename = "Wellhead_Pressure", deserialize_with = "nan_if_empty")]
    pub wellhead_pressure: f64,
    #[serde(rename = "Reservoir_Temperature", deserialize_with = "nan_if_empty")]
    pub reservoir_temperature: f64,
}

fn nan_if_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Numeric columns of [`WellRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Day,
    OilProduction,
    GasProduction,
    WaterCut,
    WellheadPressure,
    ReservoirTemperature,
}

impl Column {
    /// Header name in the CSV export.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::OilProduction => "Oil_Production",
            Self::GasProduction => "Gas_Production",
            Self::WaterCut => "Water_Cut",
            Self::WellheadPressure => "Wellhead_Pressure",
            Self::ReservoirTemperature => "Reservoir_Temperature",
        }
    }
}

/// Every header the loader requires, in export order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Well_ID",
    "Day",
    "Oil_Production",
    "Gas_Production",
    "Water_Cut",
    "Wellhead_Pressure",
    "Reservoir_Temperature",
];

impl WellRecord {
    /// Value of a numeric column; the day is widened to `f64`.
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Day => self.day as f64,
            Column::OilProduction => self.oil_production,
            Column::GasProduction => self.gas_production,
            Column::WaterCut => self.water_cut,
            Column::WellheadPressure => self.wellhead_pressure,
            Column::ReservoirTemperature => self.reservoir_temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns_cover_every_field() {
        for column in [
            Column::Day,
            Column::OilProduction,
            Column::GasProduction,
            Column::WaterCut,
            Column::WellheadPressure,
            Column::ReservoirTemperature,
        ] {
            assert!(REQUIRED_COLUMNS.contains(&column.header()));
        }
    }
}
