use eframe::egui::{self, Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::chart::ChartSpec;
use crate::color::{glow, hex_to_color32};
use crate::state::AppState;
use crate::theme::ThemeStyle;
use crate::ui::scatter3d::scatter_3d;

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Chart grid (home page)
// ---------------------------------------------------------------------------

/// Render the current chart set: 2D charts side by side, 3D charts full width.
pub fn chart_grid(ui: &mut Ui, state: &mut AppState) {
    let style = ThemeStyle::resolve(&state.theme);

    let (flat, deep): (Vec<&ChartSpec>, Vec<&ChartSpec>) =
        state.charts.iter().partition(|c| !c.is_3d());

    if !flat.is_empty() {
        ui.columns(flat.len(), |cols| {
            for (col, chart) in cols.iter_mut().zip(&flat) {
                scatter_2d(col, chart, &style);
            }
        });
    }

    for chart in deep {
        ui.add_space(8.0);
        scatter_3d(ui, chart, &style, &mut state.orbit, CHART_HEIGHT * 1.3);
    }
}

// ---------------------------------------------------------------------------
// 2D scatter
// ---------------------------------------------------------------------------

pub fn scatter_2d(ui: &mut Ui, chart: &ChartSpec, style: &ThemeStyle) {
    egui::Frame::group(ui.style())
        .fill(style.background)
        .show(ui, |ui: &mut Ui| {
            ui.visuals_mut().override_text_color = Some(style.text);
            ui.vertical_centered(|ui: &mut Ui| {
                ui.strong(&chart.title);
            });

            Plot::new(("scatter", chart.title.as_str()))
                .legend(Legend::default())
                .x_axis_label(chart.x.label())
                .y_axis_label(chart.y.label())
                .height(CHART_HEIGHT)
                .show_background(false)
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(false)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    for trace in &chart.traces {
                        let base = hex_to_color32(&trace.color).unwrap_or(Color32::GRAY);
                        let color = style.marker_color(base);
                        let xy: Vec<[f64; 2]> =
                            trace.x.iter().zip(&trace.y).map(|(&x, &y)| [x, y]).collect();

                        if style.glow {
                            plot_ui.points(
                                Points::new(PlotPoints::from(xy.clone()))
                                    .name(trace.species.label())
                                    .color(glow(color))
                                    .radius(style.marker_radius * 1.8)
                                    .shape(MarkerShape::Circle)
                                    .filled(true),
                            );
                        }

                        plot_ui.points(
                            Points::new(PlotPoints::from(xy))
                                .name(trace.species.label())
                                .color(color)
                                .radius(style.marker_radius)
                                .shape(MarkerShape::Circle)
                                .filled(true),
                        );
                    }
                });
        });
}
