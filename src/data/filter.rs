use std::collections::BTreeSet;

use super::model::{IrisDataset, IrisRecord, NumericColumn, Species};

// ---------------------------------------------------------------------------
// Group view: the records of one species
// ---------------------------------------------------------------------------

/// Borrowed, read-only subset of a dataset for a single species.
/// Recomputed on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct GroupView<'a> {
    records: Vec<&'a IrisRecord>,
}

impl<'a> GroupView<'a> {
    pub fn new(dataset: &'a IrisDataset, species: Species) -> Self {
        let records = dataset
            .records()
            .iter()
            .filter(|rec| rec.species == species)
            .collect();
        GroupView { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one column for every record in the group, in dataset order.
    pub fn values(&self, column: NumericColumn) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(move |rec| rec.value(column))
    }
}

impl IrisDataset {
    pub fn group(&self, species: Species) -> GroupView<'_> {
        GroupView::new(self, species)
    }
}

// ---------------------------------------------------------------------------
// Table filter: which species are shown in the data table
// ---------------------------------------------------------------------------

/// Selected species. An empty set shows nothing.
pub type FilterState = BTreeSet<Species>;

/// Initialise a [`FilterState`] with every species selected.
pub fn init_filter_state() -> FilterState {
    Species::ALL.into_iter().collect()
}

/// Return indices of records whose species is selected.
pub fn filtered_indices(dataset: &IrisDataset, filters: &FilterState) -> Vec<usize> {
    if filters.len() == Species::ALL.len() {
        // everything selected, no filtering needed
        return (0..dataset.len()).collect();
    }
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.contains(&rec.species))
        .map(|(i, _)| i)
        .collect()
}
