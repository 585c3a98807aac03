use eframe::egui;

use crate::route::Route;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct IrisDashApp {
    pub state: AppState,
    /// Text of the location field in the top bar.
    path_input: String,
}

impl IrisDashApp {
    pub fn new(state: AppState) -> Self {
        let path_input = state.path.clone();
        Self { state, path_input }
    }
}

impl eframe::App for IrisDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu, navigation, chart controls ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &mut self.path_input);
        });

        // ---- Central panel: routed page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.route.clone() {
            Route::Home => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| panels::home_page(ui, &mut self.state));
            }
            Route::Dashboard => panels::dashboard_page(ui),
            Route::NotFound(path) => panels::not_found_page(ui, &path),
        });
    }
}
