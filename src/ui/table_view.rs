use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::data::view::TableView;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Table mode – raw data with search, plus dataset-level metrics
// ---------------------------------------------------------------------------

/// Render the table view: search box, the projected/sampled/filtered
/// rows, and three metrics over the whole dataset.
pub fn table_view(ui: &mut Ui, state: &mut AppState, dataset: &Dataset) {
    ui.heading("Raw Data");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut state.search_term)
                .hint_text("case-insensitive substring"),
        );
    });
    ui.add_space(4.0);

    let view = TableView::build(
        dataset,
        &state.selected_columns,
        state.sample_size,
        &state.search_term,
    );

    // Metrics describe the unfiltered dataset, not the view. The
    // mismatch with the displayed table is inherited behavior and
    // intentional.
    metrics_row(ui, dataset);
    ui.separator();

    if view.columns.is_empty() {
        ui.label("No columns selected.");
        return;
    }
    if view.is_empty() {
        ui.label("No rows match the current search.");
        return;
    }

    data_table(ui, &view);
}

fn metrics_row(ui: &mut Ui, dataset: &Dataset) {
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Total records", dataset.n_rows());
        metric(ui, "Columns", dataset.n_cols());
        metric(ui, "Missing values", dataset.missing_count());
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong(format!("{value}"));
            ui.small(label);
        });
    });
}

fn data_table(ui: &mut Ui, view: &TableView) {
    let n_cols = view.columns.len();
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(60.0).clip(true), n_cols)
        .header(20.0, |mut header| {
            for name in &view.columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, view.n_rows(), |mut row| {
                let r = row.index();
                for c in 0..n_cols {
                    row.col(|ui: &mut Ui| {
                        ui.label(view.rows[r][c].to_string());
                    });
                }
            });
        });
}
