use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FftAverageApp {
    pub state: AppState,
}

impl FftAverageApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for FftAverageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::averaged_plot(ui, &self.state.series, self.state.x_range);
        });
    }
}
