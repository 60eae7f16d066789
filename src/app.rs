use eframe::egui;

use crate::data::loader;
use crate::data::model::Dataset;
use crate::state::{AppState, ViewMode};
use crate::ui::{panels, plot, stats_view, table_view};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// The dashboard application. Immediate mode means `update` re-runs the
/// whole pipeline on every frame; the dataset itself comes out of the
/// loader's memoized slot each time.
pub struct MarksboardApp {
    pub state: AppState,
}

impl MarksboardApp {
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for MarksboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Per-frame re-entry into the loader: a cache hit after the
        // successful load in main, never a file read.
        let dataset = match loader::load_cached(loader::DATA_PATH) {
            Ok(ds) => ds,
            Err(e) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load dataset");
                    ui.label(e.to_string());
                });
                return;
            }
        };

        // ---- Top panel: title + load status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, dataset);
        });

        // ---- Left side panel: filters and settings ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, dataset);
            });

        // ---- Central panel: mode router ----
        // Exactly one branch runs; nothing is shared across modes
        // beyond the memoized dataset and the control state.
        egui::CentralPanel::default().show(ctx, |ui| match self.state.mode {
            ViewMode::Table => table_view::table_view(ui, &mut self.state, dataset),
            ViewMode::Statistics => stats_view::statistics_view(ui, &mut self.state, dataset),
            ViewMode::Visualization => plot::chart_view(ui, &mut self.state, dataset),
        });
    }
}
