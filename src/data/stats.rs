use thiserror::Error;

use super::model::{IrisDataset, NumericColumn, Species};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A group key or column name outside the known sets.
    #[error("invalid {kind} selector: {value:?}")]
    InvalidSelector { kind: &'static str, value: String },

    /// The group has no records, so mean and standard deviation are undefined.
    #[error("no {species} records to summarise {column}")]
    NoData {
        species: Species,
        column: NumericColumn,
    },
}

// ---------------------------------------------------------------------------
// Descriptive statistics over one column of one species
// ---------------------------------------------------------------------------

/// Full-precision summary. Rounding is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n − 1 divisor). `None` with fewer than two values.
    pub std_dev: Option<f64>,
    pub max: f64,
    pub min: f64,
}

/// Summarise `column` over the records of `species`.
pub fn compute_stats(
    dataset: &IrisDataset,
    species: Species,
    column: NumericColumn,
) -> Result<ColumnStats, StatsError> {
    let group = dataset.group(species);
    if group.is_empty() {
        return Err(StatsError::NoData { species, column });
    }

    let count = group.len();
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for v in group.values(column) {
        sum += v;
        max = max.max(v);
        min = min.min(v);
    }
    let mean = sum / count as f64;

    let std_dev = (count > 1).then(|| {
        let sq: f64 = group.values(column).map(|v| (v - mean).powi(2)).sum();
        (sq / (count - 1) as f64).sqrt()
    });

    Ok(ColumnStats {
        count,
        mean,
        std_dev,
        max,
        min,
    })
}
