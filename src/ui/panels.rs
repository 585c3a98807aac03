use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText, Ui};

use crate::chart::AppVariant;
use crate::color::species_color;
use crate::data::model::{NumericColumn, Species};
use crate::route::nav_links;
use crate::state::AppState;
use crate::theme::{ThemeName, KNOWN_THEMES};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu, navigation links and chart controls.
/// `path_input` is the editable location field.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, path_input: &mut String) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(RichText::new("🌸 IRIS").strong());

        // ---- Navigation ----
        for link in nav_links(&state.path) {
            let text = if link.active {
                RichText::new(link.label).strong().underline()
            } else {
                RichText::new(link.label)
            };
            if ui.selectable_label(link.active, text).clicked() {
                state.navigate(link.href);
                *path_input = link.href.to_string();
            }
        }

        let response = ui.add(egui::TextEdit::singleline(path_input).desired_width(140.0));
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.navigate(path_input.as_str());
        }

        ui.separator();

        // ---- Chart controls ----
        ui.label("Theme");
        let current = state.theme.clone();
        egui::ComboBox::from_id_salt("theme")
            .selected_text(current.as_str())
            .show_ui(ui, |ui: &mut Ui| {
                for name in KNOWN_THEMES {
                    if ui.selectable_label(current.as_str() == name, name).clicked() {
                        state.set_theme(ThemeName::new(name));
                    }
                }
            });

        for variant in AppVariant::ALL {
            if ui
                .selectable_label(state.variant == variant, variant.label())
                .clicked()
            {
                state.set_variant(variant);
            }
        }

        ui.separator();
        ui.label(format!("{} records", state.dataset.len()));

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub fn home_page(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("IRIS DATASET").size(32.0).strong());
        ui.label("Biometric analysis of the three Iris species");
    });
    ui.add_space(12.0);

    ui.columns(Species::ALL.len(), |cols| {
        for (col, species) in cols.iter_mut().zip(Species::ALL) {
            species_card(col, state, species);
        }
    });

    ui.add_space(12.0);
    section(ui, "Scatter plots", |ui| plot::chart_grid(ui, state));
    ui.add_space(12.0);
    section(ui, "Data", |ui| table::data_table(ui, state));
}

pub fn dashboard_page(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Dashboard – coming soon");
    });
}

pub fn not_found_page(ui: &mut Ui, path: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(format!("404 – page {path:?} not found"));
    });
}

fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.heading(title);
        ui.separator();
        add_contents(ui);
    });
}

// ---------------------------------------------------------------------------
// Species statistics card
// ---------------------------------------------------------------------------

fn species_card(ui: &mut Ui, state: &mut AppState, species: Species) {
    let color = species_color(species);
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(species.title()).size(20.0).strong().color(color));

        let current = state
            .selections
            .get(&species)
            .copied()
            .unwrap_or(NumericColumn::SepalLength);
        egui::ComboBox::from_id_salt(("column", species.label()))
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for column in NumericColumn::MEASUREMENTS {
                    if ui.selectable_label(current == column, column.label()).clicked() {
                        state.select_column(species, column);
                    }
                }
            });
        ui.add_space(6.0);

        let Some(panel) = state.panels.get(&species) else {
            return;
        };
        match &panel.content {
            Ok(cells) => {
                egui::Grid::new(("stats", species.label()))
                    .num_columns(2)
                    .spacing([24.0, 8.0])
                    .show(ui, |ui: &mut Ui| {
                        for (i, cell) in cells.iter().enumerate() {
                            ui.vertical(|ui: &mut Ui| {
                                ui.label(RichText::new(&cell.value).size(24.0).strong().color(color));
                                ui.label(cell.label);
                            });
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            }
            Err(msg) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open iris data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} records from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart specifications")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match export_charts(state, &path) {
            Ok(()) => {
                log::info!("Exported {} charts to {}", state.charts.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

fn export_charts(state: &AppState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&state.charts).context("serialising charts")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}
