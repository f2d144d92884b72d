use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the figure title and a one-line summary of the averaged data.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&state.title);
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label(state.summary());
        ui.separator();
        ui.label(format!(
            "{}: {} – {}",
            state.series.frequency_label, state.x_range[0], state.x_range[1]
        ));
    });
    ui.add_space(2.0);
}

