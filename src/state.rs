use std::collections::BTreeMap;
use std::sync::Arc;

use crate::chart::{chart_set, AppVariant, ChartSpec};
use crate::config::AppConfig;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::model::{IrisDataset, NumericColumn, Species};
use crate::data::stats::StatsError;
use crate::route::Route;
use crate::theme::ThemeName;
use crate::ui::scatter3d::Orbit;
use crate::view::{paginate, stats_panel, PageWindow, StatsPanel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every `set_*`/`select_*`/`navigate` method is one UI event: it recomputes
/// only the outputs that depend on it.
pub struct AppState {
    /// Read-only table shared with every handler.
    pub dataset: Arc<IrisDataset>,

    /// Current location and the page it maps to.
    pub path: String,
    pub route: Route,

    /// Column chosen in each species card, and the resulting stats.
    pub selections: BTreeMap<Species, NumericColumn>,
    pub panels: BTreeMap<Species, StatsPanel>,

    /// Chart theme, chart set and the built charts.
    pub theme: ThemeName,
    pub variant: AppVariant,
    pub charts: Vec<ChartSpec>,

    /// Camera of the 3D chart.
    pub orbit: Orbit,

    /// Species shown in the data table.
    pub filters: FilterState,

    /// Indices of records passing the table filter (cached).
    pub visible_indices: Vec<usize>,

    /// Current table page (0-based) and rows per page.
    pub page: usize,
    pub page_size: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Arc<IrisDataset>, config: &AppConfig) -> Self {
        let mut state = Self {
            dataset,
            path: "/".to_string(),
            route: Route::Home,
            selections: Species::ALL
                .into_iter()
                .map(|sp| (sp, NumericColumn::SepalLength))
                .collect(),
            panels: BTreeMap::new(),
            theme: config.theme.clone(),
            variant: config.variant,
            charts: Vec::new(),
            orbit: Orbit::default(),
            filters: init_filter_state(),
            visible_indices: Vec::new(),
            page: 0,
            page_size: config.page_size.max(1),
            status_message: None,
        };
        for (species, column) in &config.selections {
            if let Err(e) = state.select_column_by_name(species, column) {
                log::warn!("Ignoring configured selection: {e}");
            }
        }
        state.recompute_all();
        state
    }

    /// Swap in a newly loaded dataset and rebuild everything derived from it.
    pub fn set_dataset(&mut self, dataset: IrisDataset) {
        self.dataset = Arc::new(dataset);
        self.page = 0;
        self.status_message = None;
        self.recompute_all();
    }

    fn recompute_all(&mut self) {
        for species in Species::ALL {
            self.refresh_panel(species);
        }
        self.rebuild_charts();
        self.refilter();
    }

    fn refresh_panel(&mut self, species: Species) {
        let column = self
            .selections
            .get(&species)
            .copied()
            .unwrap_or(NumericColumn::SepalLength);
        self.panels
            .insert(species, stats_panel(&self.dataset, species, column));
    }

    fn rebuild_charts(&mut self) {
        self.charts = chart_set(&self.dataset, self.variant, &self.theme);
    }

    /// Dropdown change in a species card.
    pub fn select_column(&mut self, species: Species, column: NumericColumn) {
        self.selections.insert(species, column);
        self.refresh_panel(species);
    }

    /// Dropdown change arriving as raw names. Unknown names are rejected and
    /// leave the current selection untouched.
    pub fn select_column_by_name(&mut self, species: &str, column: &str) -> Result<(), StatsError> {
        let species: Species = species.parse()?;
        let column: NumericColumn = column.parse()?;
        self.select_column(species, column);
        Ok(())
    }

    /// Theme selector change.
    pub fn set_theme(&mut self, theme: ThemeName) {
        if theme != self.theme {
            log::debug!("Theme changed to {theme}");
            self.theme = theme;
            self.rebuild_charts();
        }
    }

    pub fn set_variant(&mut self, variant: AppVariant) {
        if variant != self.variant {
            self.variant = variant;
            self.rebuild_charts();
        }
    }

    /// Location change. Touches nothing but the route.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::from_path(path);
        log::info!("Navigating to {path:?} → {route:?}");
        self.path = path.trim().to_string();
        self.route = route;
    }

    /// Toggle a species in the data table filter.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.filters.remove(&species) {
            self.filters.insert(species);
        }
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        self.page = self.page_window().page;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = paginate(self.visible_indices.len(), self.page_size, page).page;
    }

    /// The current page of the data table.
    pub fn page_window(&self) -> PageWindow {
        paginate(self.visible_indices.len(), self.page_size, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_builtin;
    use crate::data::model::IrisRecord;

    fn state() -> AppState {
        AppState::new(Arc::new(load_builtin().unwrap()), &AppConfig::default())
    }

    #[test]
    fn starts_on_home_with_sepal_length_panels() {
        let s = state();
        assert_eq!(s.route, Route::Home);
        assert_eq!(s.panels.len(), 3);
        assert!(s
            .panels
            .values()
            .all(|p| p.column == NumericColumn::SepalLength && p.content.is_ok()));
        assert_eq!(s.charts.len(), 3);
        assert_eq!(s.visible_indices.len(), 150);
    }

    #[test]
    fn selecting_a_column_only_refreshes_that_card() {
        let mut s = state();
        let before = s.panels[&Species::Versicolor].clone();
        s.select_column(Species::Setosa, NumericColumn::PetalWidth);
        assert_eq!(s.panels[&Species::Setosa].column, NumericColumn::PetalWidth);
        assert_eq!(s.panels[&Species::Versicolor], before);
    }

    #[test]
    fn unknown_names_are_invalid_selectors() {
        let mut s = state();
        let before = s.panels.clone();
        assert!(matches!(
            s.select_column_by_name("", "sepal_length"),
            Err(StatsError::InvalidSelector { kind: "species", .. })
        ));
        assert!(matches!(
            s.select_column_by_name("setosa", "stem_length"),
            Err(StatsError::InvalidSelector { kind: "column", .. })
        ));
        assert_eq!(s.panels, before);
    }

    #[test]
    fn configured_selections_seed_the_cards() {
        let mut config = AppConfig::default();
        config
            .selections
            .insert("virginica".to_string(), "petal_width".to_string());
        config
            .selections
            .insert("lotus".to_string(), "petal_width".to_string());
        let s = AppState::new(Arc::new(load_builtin().unwrap()), &config);
        assert_eq!(s.panels[&Species::Virginica].column, NumericColumn::PetalWidth);
        assert_eq!(s.panels[&Species::Setosa].column, NumericColumn::SepalLength);
    }

    #[test]
    fn unknown_path_keeps_dataset_and_stats() {
        let mut s = state();
        s.select_column(Species::Virginica, NumericColumn::PetalLength);
        let panels = s.panels.clone();
        let dataset = Arc::clone(&s.dataset);

        s.navigate("/nowhere");

        assert_eq!(s.route, Route::NotFound("/nowhere".to_string()));
        assert_eq!(s.panels, panels);
        assert!(Arc::ptr_eq(&s.dataset, &dataset));
        assert_eq!(s.dataset.len(), 150);
    }

    #[test]
    fn theme_change_rethemes_every_chart() {
        let mut s = state();
        let before = s.charts.clone();
        s.set_theme(ThemeName::new("plotly_white"));
        assert!(s.charts.iter().all(|c| c.theme.as_str() == "plotly_white"));
        for (old, new) in before.iter().zip(&s.charts) {
            assert_eq!(old.traces, new.traces);
        }
    }

    #[test]
    fn variant_switch_rebuilds_chart_set() {
        let mut s = state();
        s.set_variant(AppVariant::Planar);
        assert!(s.charts.iter().all(|c| !c.is_3d()));
        s.set_variant(AppVariant::Spatial);
        assert!(s.charts.iter().any(|c| c.is_3d()));
    }

    #[test]
    fn filtering_clamps_the_page() {
        let mut s = state();
        s.set_page(14);
        assert_eq!(s.page, 14);
        s.toggle_species(Species::Setosa);
        s.toggle_species(Species::Versicolor);
        assert_eq!(s.visible_indices.len(), 50);
        assert_eq!(s.page, 4);
        assert_eq!(s.page_window().end, 50);
    }

    #[test]
    fn new_dataset_reports_missing_species() {
        let mut s = state();
        s.set_dataset(IrisDataset::from_records(vec![IrisRecord {
            sepal_length: 5.0,
            sepal_width: 3.0,
            petal_length: 1.4,
            petal_width: 0.2,
            species: Species::Setosa,
        }]));
        assert!(s.panels[&Species::Setosa].content.is_ok());
        assert!(s.panels[&Species::Virginica].content.is_err());
        assert_eq!(s.visible_indices, vec![0]);
    }
}
