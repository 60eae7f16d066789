use crate::data::chart::{ChartKind, ChartRequest};
use crate::data::model::Dataset;

/// Number of columns selected when a dataset first appears.
pub const DEFAULT_COLUMN_COUNT: usize = 5;

/// Sample-size slider bounds and step.
pub const SAMPLE_MIN: usize = 10;
pub const SAMPLE_STEP: usize = 10;
pub const SAMPLE_DEFAULT: usize = 100;

// ---------------------------------------------------------------------------
// ViewMode – which of the three disjoint computations runs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Statistics,
    Visualization,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::Table,
        ViewMode::Statistics,
        ViewMode::Visualization,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Statistics => "Statistics",
            ViewMode::Visualization => "Visualization",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// All control state of the dashboard. Holds no derived data: every
/// view, summary, and chart spec is rebuilt from the memoized dataset
/// plus these values on each frame.
pub struct AppState {
    /// Selected columns, in insertion order (= display order).
    pub selected_columns: Vec<String>,

    /// Prefix row cap, kept in `[SAMPLE_MIN, row count]` by the slider.
    pub sample_size: usize,

    /// Which of the three views is active.
    pub mode: ViewMode,

    /// Free-text search, table mode only.
    pub search_term: String,

    /// Target column of the statistics view.
    pub stat_target: Option<String>,

    /// Chart controls of the visualization view.
    pub chart_kind: ChartKind,
    pub chart_x: Option<String>,
    pub chart_y: Option<String>,
}

impl AppState {
    /// Initial control state for a freshly loaded dataset: first five
    /// columns selected, sample capped at 100 rows, first numeric
    /// columns preselected for statistics and chart axes.
    pub fn new(dataset: &Dataset) -> Self {
        let selected_columns: Vec<String> = dataset
            .columns
            .iter()
            .take(DEFAULT_COLUMN_COUNT)
            .cloned()
            .collect();

        let numeric = dataset.numeric_columns();

        AppState {
            selected_columns,
            sample_size: SAMPLE_DEFAULT.min(dataset.n_rows()).max(SAMPLE_MIN),
            mode: ViewMode::Table,
            search_term: String::new(),
            stat_target: numeric.first().cloned(),
            chart_kind: ChartKind::Histogram,
            chart_x: numeric.first().cloned(),
            chart_y: numeric.get(1).cloned(),
        }
    }

    /// Toggle a column in the selection. A newly selected column goes
    /// to the end, so insertion order drives display order.
    pub fn toggle_column(&mut self, column: &str) {
        if let Some(pos) = self.selected_columns.iter().position(|c| c == column) {
            self.selected_columns.remove(pos);
        } else {
            self.selected_columns.push(column.to_string());
        }
    }

    /// Slider upper bound for the given dataset.
    pub fn sample_max(dataset: &Dataset) -> usize {
        dataset.n_rows().max(SAMPLE_MIN)
    }

    /// The chart request as currently configured.
    pub fn chart_request(&self) -> ChartRequest {
        ChartRequest {
            kind: self.chart_kind,
            x: self.chart_x.clone(),
            y: if self.chart_kind.needs_y() {
                self.chart_y.clone()
            } else {
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n_rows: usize, columns: &[&str]) -> Dataset {
        let records = (0..n_rows)
            .map(|i| columns.iter().map(|_| format!("{i}")).collect())
            .collect();
        Dataset::from_records(columns.iter().map(|c| c.to_string()).collect(), records)
    }

    #[test]
    fn defaults_follow_the_dataset() {
        let ds = dataset(120, &["a", "b", "c", "d", "e", "f", "g"]);
        let state = AppState::new(&ds);
        assert_eq!(state.selected_columns, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(state.sample_size, 100);
        assert_eq!(state.mode, ViewMode::Table);
    }

    #[test]
    fn small_dataset_caps_the_default_sample() {
        let ds = dataset(30, &["a"]);
        let state = AppState::new(&ds);
        assert_eq!(state.sample_size, 30);
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let ds = dataset(10, &["a", "b", "c"]);
        let mut state = AppState::new(&ds);
        state.toggle_column("a"); // remove
        state.toggle_column("a"); // re-add at the end
        assert_eq!(state.selected_columns, vec!["b", "c", "a"]);
    }

    #[test]
    fn chart_request_drops_y_for_single_column_kinds() {
        let ds = dataset(10, &["a", "b"]);
        let mut state = AppState::new(&ds);
        state.chart_y = Some("b".into());
        state.chart_kind = ChartKind::BoxPlot;
        assert_eq!(state.chart_request().y, None);
        state.chart_kind = ChartKind::Scatter;
        assert_eq!(state.chart_request().y, Some("b".into()));
    }
}
