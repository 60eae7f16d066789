use eframe::egui::{self, Color32, Ui};

use crate::data::chart;
use crate::data::model::Dataset;
use crate::data::stats::{self, Summary};
use crate::data::view::TableView;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Statistics mode – summary of one numeric column + its distribution
// ---------------------------------------------------------------------------

/// Render the statistics view: target-column selector, the summary
/// grid, and a histogram of the target's distribution.
pub fn statistics_view(ui: &mut Ui, state: &mut AppState, dataset: &Dataset) {
    ui.heading("Statistical Analysis");

    // Statistics and charts see the sampled rows of every column; the
    // search box only narrows the table view.
    let view = TableView::build(dataset, &dataset.columns, state.sample_size, "");

    let numeric = dataset.numeric_columns();
    if numeric.is_empty() {
        warning(ui, "The dataset has no numeric columns to analyze.");
        return;
    }

    // Keep the target valid if the dataset changed under it.
    let current = state
        .stat_target
        .clone()
        .filter(|c| numeric.contains(c))
        .unwrap_or_else(|| numeric[0].clone());
    state.stat_target = Some(current.clone());

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Column:");
        egui::ComboBox::from_id_salt("stat_target")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for col in &numeric {
                    if ui.selectable_label(current == *col, col).clicked() {
                        state.stat_target = Some(col.clone());
                    }
                }
            });
    });
    ui.add_space(4.0);

    match stats::summarize(&view, &current) {
        Ok(summary) => {
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].strong("Summary");
                summary_grid(&mut cols[0], &summary);
                cols[1].strong("Distribution");
                let spec = chart::histogram_spec(&view, &current);
                plot::chart(&mut cols[1], &spec);
            });
        }
        Err(e) => warning(ui, &e.to_string()),
    }
}

fn summary_grid(ui: &mut Ui, summary: &Summary) {
    egui::Grid::new("summary_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("count");
            ui.label(format!("{}", summary.count));
            ui.end_row();
            for (name, value) in [
                ("mean", summary.mean),
                ("std", summary.std),
                ("min", summary.min),
                ("25%", summary.q25),
                ("50%", summary.median),
                ("75%", summary.q75),
                ("max", summary.max),
            ] {
                ui.label(name);
                ui.label(format!("{value:.4}"));
                ui.end_row();
            }
        });
}

/// Non-fatal warning label; the rest of the page keeps working.
pub fn warning(ui: &mut Ui, text: &str) {
    ui.colored_label(Color32::from_rgb(0xcc, 0x88, 0x00), text);
}
