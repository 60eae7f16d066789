use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, Plot, PlotPoints, Points};

use crate::data::chart::{build_chart, ChartKind, ChartSpec};
use crate::data::model::Dataset;
use crate::data::view::TableView;
use crate::state::AppState;
use crate::ui::stats_view::warning;

// ---------------------------------------------------------------------------
// Visualization mode – chart controls + one rendered chart
// ---------------------------------------------------------------------------

/// Render the visualization view: chart-kind and axis selectors, then
/// the chart built from the sampled view.
pub fn chart_view(ui: &mut Ui, state: &mut AppState, dataset: &Dataset) {
    ui.heading("Data Visualization");

    let view = TableView::build(dataset, &dataset.columns, state.sample_size, "");
    let numeric = dataset.numeric_columns();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Chart:");
        egui::ComboBox::from_id_salt("chart_kind")
            .selected_text(state.chart_kind.label())
            .show_ui(ui, |ui: &mut Ui| {
                for kind in ChartKind::ALL {
                    ui.selectable_value(&mut state.chart_kind, kind, kind.label());
                }
            });

        column_selector(ui, "X axis:", "chart_x", &numeric, &mut state.chart_x);
        if state.chart_kind.needs_y() {
            column_selector(ui, "Y axis:", "chart_y", &numeric, &mut state.chart_y);
        }
    });
    ui.add_space(4.0);

    match build_chart(&view, &state.chart_request()) {
        Ok(spec) => chart(ui, &spec),
        Err(e) => warning(ui, &e.to_string()),
    }
}

fn column_selector(
    ui: &mut Ui,
    label: &str,
    id: &str,
    numeric: &[String],
    slot: &mut Option<String>,
) {
    ui.label(label);
    let current = slot.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt(id.to_string())
        .selected_text(current.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for col in numeric {
                if ui.selectable_label(current == *col, col).clicked() {
                    *slot = Some(col.clone());
                }
            }
        });
}

// ---------------------------------------------------------------------------
// ChartSpec renderer
// ---------------------------------------------------------------------------

const ACCENT: Color32 = Color32::LIGHT_BLUE;

/// Draw a [`ChartSpec`]. Placeholders become a centered hint instead of
/// an empty plot frame.
pub fn chart(ui: &mut Ui, spec: &ChartSpec) {
    match spec {
        ChartSpec::Histogram {
            title,
            bin_width,
            bins,
        } => {
            let bars: Vec<Bar> = bins
                .iter()
                .map(|b| Bar::new(b.center, b.count as f64).width(*bin_width))
                .collect();
            Plot::new(title.clone())
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars).name(title).color(ACCENT));
                });
        }
        ChartSpec::BoxPlot { title, summary } => {
            let elem = BoxElem::new(
                0.0,
                BoxSpread::new(
                    summary.min,
                    summary.q25,
                    summary.median,
                    summary.q75,
                    summary.max,
                ),
            )
            .box_width(0.5);
            Plot::new(title.clone())
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .show(ui, |plot_ui| {
                    plot_ui.box_plot(BoxPlot::new(vec![elem]).name(title).color(ACCENT));
                });
        }
        ChartSpec::Scatter {
            title,
            x_label,
            y_label,
            points,
        } => {
            let pts: PlotPoints = points.iter().copied().collect();
            Plot::new(title.clone())
                .x_axis_label(x_label.clone())
                .y_axis_label(y_label.clone())
                .show(ui, |plot_ui| {
                    plot_ui.points(Points::new(pts).name(title).radius(2.5).color(ACCENT));
                });
        }
        ChartSpec::Line {
            title,
            x_label,
            y_label,
            points,
        } => {
            let pts: PlotPoints = points.iter().copied().collect();
            Plot::new(title.clone())
                .x_axis_label(x_label.clone())
                .y_axis_label(y_label.clone())
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(pts).name(title).width(1.5).color(ACCENT));
                });
        }
        ChartSpec::Placeholder { hint } => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(egui::RichText::new(hint).weak());
            });
        }
    }
}
