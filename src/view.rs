use crate::data::model::{IrisDataset, NumericColumn, Species};
use crate::data::stats::compute_stats;

pub const DEFAULT_PAGE_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Species statistics card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    pub value: String,
}

/// Display content for one species card: four rounded figures or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanel {
    pub column: NumericColumn,
    pub content: Result<[StatCell; 4], String>,
}

fn fmt2(v: f64) -> String {
    format!("{v:.2}")
}

pub fn stats_panel(dataset: &IrisDataset, species: Species, column: NumericColumn) -> StatsPanel {
    let content = match compute_stats(dataset, species, column) {
        Ok(s) => {
            log::debug!("Stats for {species}/{column} over {} records", s.count);
            Ok([
                StatCell {
                    label: "Mean",
                    value: fmt2(s.mean),
                },
                StatCell {
                    label: "Std Dev",
                    value: s.std_dev.map(fmt2).unwrap_or_else(|| "n/a".to_string()),
                },
                StatCell {
                    label: "Max",
                    value: fmt2(s.max),
                },
                StatCell {
                    label: "Min",
                    value: fmt2(s.min),
                },
            ])
        }
        Err(e) => {
            log::warn!("Stats unavailable for {species}/{column}: {e}");
            Err(e.to_string())
        }
    };
    StatsPanel { column, content }
}

// ---------------------------------------------------------------------------
// Table pagination
// ---------------------------------------------------------------------------

/// Row window of one table page. `start..end` indexes the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_count: usize,
    pub start: usize,
    pub end: usize,
}

/// Window for `page` (0-based, clamped to the last page). An empty table has one empty page.
pub fn paginate(total: usize, page_size: usize, page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = (page * page_size).min(total);
    let end = (start + page_size).min(total);
    PageWindow {
        page,
        page_count,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_builtin;
    use crate::data::model::IrisRecord;

    #[test]
    fn setosa_panel_is_rounded_to_two_decimals() {
        let ds = load_builtin().unwrap();
        let panel = stats_panel(&ds, Species::Setosa, NumericColumn::SepalLength);
        let cells = panel.content.unwrap();
        let values: Vec<&str> = cells.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["5.01", "0.35", "5.80", "4.30"]);
        assert_eq!(cells[1].label, "Std Dev");
    }

    #[test]
    fn empty_group_panel_carries_message() {
        let ds = IrisDataset::from_records(vec![IrisRecord {
            sepal_length: 5.0,
            sepal_width: 3.0,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        }]);
        let panel = stats_panel(&ds, Species::Versicolor, NumericColumn::PetalWidth);
        assert!(panel.content.unwrap_err().contains("no versicolor records"));
    }

    #[test]
    fn single_record_panel_shows_na_std_dev() {
        let ds = IrisDataset::from_records(vec![IrisRecord {
            sepal_length: 5.0,
            sepal_width: 3.0,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        }]);
        let cells = stats_panel(&ds, Species::Setosa, NumericColumn::SepalWidth)
            .content
            .unwrap();
        assert_eq!(cells[1].value, "n/a");
    }

    #[test]
    fn pages_split_150_rows_into_15() {
        let w = paginate(150, 10, 0);
        assert_eq!((w.page_count, w.start, w.end), (15, 0, 10));
        let last = paginate(150, 10, 14);
        assert_eq!((last.start, last.end), (140, 150));
    }

    #[test]
    fn page_index_is_clamped() {
        let w = paginate(25, 10, 99);
        assert_eq!((w.page, w.start, w.end), (2, 20, 25));
    }

    #[test]
    fn empty_table_has_single_empty_page() {
        let w = paginate(0, 10, 3);
        assert_eq!((w.page, w.page_count, w.start, w.end), (0, 1, 0, 0));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let w = paginate(3, 0, 1);
        assert_eq!((w.page_count, w.start, w.end), (3, 1, 2));
    }
}
