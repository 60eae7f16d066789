use eframe::egui::{self, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::state::{AppState, ViewMode, SAMPLE_MIN, SAMPLE_STEP};

// ---------------------------------------------------------------------------
// Left side panel – filters and settings
// ---------------------------------------------------------------------------

/// Render the control panel: column multi-select, sample-size slider,
/// and the view-mode radio. Shown in every mode.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, dataset: &Dataset) {
    ui.heading("Filters & Settings");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Column multi-select ----
            ui.strong("Columns to display");
            ui.small(format!(
                "{} of {} selected",
                state.selected_columns.len(),
                dataset.n_cols()
            ));
            for col in &dataset.columns {
                let mut checked = state.selected_columns.iter().any(|c| c == col);
                if ui.checkbox(&mut checked, col).changed() {
                    state.toggle_column(col);
                }
            }
            ui.separator();

            // ---- Sample-size slider ----
            ui.strong("Sample size");
            let max = AppState::sample_max(dataset);
            ui.add(
                egui::Slider::new(&mut state.sample_size, SAMPLE_MIN..=max)
                    .step_by(SAMPLE_STEP as f64)
                    .text("rows"),
            );
            ui.separator();

            // ---- View-mode radio ----
            ui.strong("View mode");
            for mode in ViewMode::ALL {
                ui.radio_value(&mut state.mode, mode, mode.label());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the load-status line.
pub fn top_bar(ui: &mut Ui, dataset: &Dataset) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Marksboard");
        ui.separator();
        ui.label(format!(
            "dataset loaded: {} rows, {} columns",
            dataset.n_rows(),
            dataset.n_cols()
        ));
    });
}
