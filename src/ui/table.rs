use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::species_color;
use crate::data::model::{NumericColumn, Species};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Paginated data table
// ---------------------------------------------------------------------------

pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    // ---- Species filter ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Show:");
        for species in Species::ALL {
            let mut checked = state.filters.contains(&species);
            let text = RichText::new(species.label()).color(species_color(species));
            if ui.checkbox(&mut checked, text).changed() {
                state.toggle_species(species);
            }
        }
    });
    ui.add_space(4.0);

    let window = state.page_window();
    let rows = &state.visible_indices[window.start..window.end];
    let records = state.dataset.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::remainder(), NumericColumn::ALL.len() + 1)
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for column in NumericColumn::MEASUREMENTS {
                header.col(|ui: &mut Ui| {
                    ui.strong(column.label());
                });
            }
            header.col(|ui: &mut Ui| {
                ui.strong("Species");
            });
            header.col(|ui: &mut Ui| {
                ui.strong(NumericColumn::SpeciesId.label());
            });
        })
        .body(|mut body| {
            for &idx in rows {
                let rec = &records[idx];
                body.row(ROW_HEIGHT, |mut row| {
                    for column in NumericColumn::MEASUREMENTS {
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{:.1}", rec.value(column)));
                        });
                    }
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(rec.species.label()).color(species_color(rec.species)),
                        );
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.species.id().to_string());
                    });
                });
            }
        });

    // ---- Pager ----
    ui.add_space(4.0);
    let mut target = None;
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(window.page > 0, egui::Button::new("◀ Prev"))
            .clicked()
        {
            target = Some(window.page - 1);
        }
        ui.label(format!(
            "Page {} / {}  ({} rows)",
            window.page + 1,
            window.page_count,
            state.visible_indices.len()
        ));
        if ui
            .add_enabled(window.page + 1 < window.page_count, egui::Button::new("Next ▶"))
            .clicked()
        {
            target = Some(window.page + 1);
        }
    });
    if let Some(page) = target {
        state.set_page(page);
    }
}
