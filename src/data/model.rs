use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::stats::StatsError;

// ---------------------------------------------------------------------------
// Species – the categorical group key
// ---------------------------------------------------------------------------

/// The three Iris species. Closed set: every record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Lower-case label as stored in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    /// Numeric code used by the `species_id` column.
    pub fn id(self) -> u8 {
        match self {
            Species::Setosa => 1,
            Species::Versicolor => 2,
            Species::Virginica => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Species::Setosa => "SETOSA",
            Species::Versicolor => "VERSICOLOR",
            Species::Virginica => "VIRGINICA",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Species {
    type Err = StatsError;

    /// Accepts `setosa` as well as the UCI spelling `Iris-setosa`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let bare = lower.strip_prefix("iris-").unwrap_or(&lower);
        Species::ALL
            .into_iter()
            .find(|sp| sp.label() == bare)
            .ok_or_else(|| StatsError::InvalidSelector {
                kind: "species",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// NumericColumn – the measurement fields
// ---------------------------------------------------------------------------

/// Numeric fields of an [`IrisRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
    SpeciesId,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 5] = [
        NumericColumn::SepalLength,
        NumericColumn::SepalWidth,
        NumericColumn::PetalLength,
        NumericColumn::PetalWidth,
        NumericColumn::SpeciesId,
    ];

    /// The continuous measurements offered in the statistics dropdowns.
    pub const MEASUREMENTS: [NumericColumn; 4] = [
        NumericColumn::SepalLength,
        NumericColumn::SepalWidth,
        NumericColumn::PetalLength,
        NumericColumn::PetalWidth,
    ];

    /// Column name as it appears in the CSV header.
    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::SepalLength => "sepal_length",
            NumericColumn::SepalWidth => "sepal_width",
            NumericColumn::PetalLength => "petal_length",
            NumericColumn::PetalWidth => "petal_width",
            NumericColumn::SpeciesId => "species_id",
        }
    }

    /// Human readable label, e.g. "Sepal Length".
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::SepalLength => "Sepal Length",
            NumericColumn::SepalWidth => "Sepal Width",
            NumericColumn::PetalLength => "Petal Length",
            NumericColumn::PetalWidth => "Petal Width",
            NumericColumn::SpeciesId => "Species Id",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericColumn {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericColumn::ALL
            .into_iter()
            .find(|col| col.name() == s.trim())
            .ok_or_else(|| StatsError::InvalidSelector {
                kind: "column",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// IrisRecord – one row of the table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrisRecord {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: Species,
}

impl IrisRecord {
    pub fn value(&self, column: NumericColumn) -> f64 {
        match column {
            NumericColumn::SepalLength => self.sepal_length,
            NumericColumn::SepalWidth => self.sepal_width,
            NumericColumn::PetalLength => self.petal_length,
            NumericColumn::PetalWidth => self.petal_width,
            NumericColumn::SpeciesId => f64::from(self.species.id()),
        }
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the immutable table
// ---------------------------------------------------------------------------

/// The full table. Built once, then only read (shared behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct IrisDataset {
    records: Vec<IrisRecord>,
}

impl IrisDataset {
    pub fn from_records(records: Vec<IrisRecord>) -> Self {
        IrisDataset { records }
    }

    pub fn records(&self) -> &[IrisRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per species, in [`Species::ALL`] order.
    pub fn species_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for rec in &self.records {
            counts[usize::from(rec.species.id() - 1)] += 1;
        }
        counts
    }
}
