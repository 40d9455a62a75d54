//! Group means and running totals.

use crate::dataset::{Dataset, WellSubset};
use crate::record::Column;
use statrs::statistics::Statistics;

/// Mean oil production of one well.
#[derive(Debug, Clone, PartialEq)]
pub struct WellMean {
    pub well_id: String,
    pub mean: f64,
}

/// Mean oil production per well, highest first.
///
/// Missing values are skipped. Wells are grouped in name order, so ties stay
/// alphabetical; a well with no values at all sorts last.
pub fn mean_by_well(dataset: &Dataset) -> Vec<WellMean> {
    let mut means: Vec<WellMean> = dataset
        .group_by_well(Column::OilProduction)
        .into_iter()
        .map(|(well_id, values)| WellMean {
            well_id,
            mean: finite_mean(&values),
        })
        .collect();
    means.sort_by(|a, b| a.well_id.cmp(&b.well_id));
    means.sort_by(|a, b| match (a.mean.is_nan(), b.mean.is_nan()) {
        (false, false) => b.mean.total_cmp(&a.mean),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    });
    means
}

/// Mean of the per-well means, ignoring wells without values.
pub fn overall_mean(means: &[WellMean]) -> Option<f64> {
    let values: Vec<f64> = means.iter().map(|m| m.mean).collect();
    let mean = finite_mean(&values);
    (!mean.is_nan()).then_some(mean)
}

/// Mean of the finite values, NaN when there are none.
fn finite_mean(values: &[f64]) -> f64 {
    values.iter().filter(|v| v.is_finite()).mean()
}

/// Running total of oil production in day order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeSeries {
    /// `(day, total up to and including that day)`
    pub points: Vec<(i64, f64)>,
}

impl CumulativeSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.points.iter().map(|(_, total)| *total).collect()
    }

    /// Final total, zero for an empty series.
    pub fn last_total(&self) -> f64 {
        self.points
            .iter()
            .rev()
            .map(|(_, total)| *total)
            .find(|total| total.is_finite())
            .unwrap_or(0.0)
    }
}

/// Running total of oil production in day order.
///
/// A missing value yields NaN at its own day and the total carries on past it.
pub fn cumulative_production(subset: &WellSubset) -> CumulativeSeries {
    let points = subset
        .records
        .iter()
        .scan(0.0, |total, record| {
            let oil = record.oil_production;
            if !oil.is_finite() {
                return Some((record.day, f64::NAN));
            }
            *total += oil;
            Some((record.day, *total))
        })
        .collect();
    CumulativeSeries { points }
}
