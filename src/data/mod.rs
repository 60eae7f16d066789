/// Data layer: core types, loading, and the view pipeline.
///
/// Architecture:
/// ```text
///      marks.csv
///          │
///          ▼
///    ┌──────────┐
///    │  loader  │  parse file once → Dataset (OnceLock cache)
///    └──────────┘
///          │
///          ▼
///    ┌──────────┐
///    │ Dataset  │  rows × typed columns, immutable
///    └──────────┘
///          │
///          ▼
///    ┌──────────┐
///    │   view   │  project columns → prefix sample → search filter
///    └──────────┘
///          │
///     ┌────┴─────┬───────────┐
///     ▼          ▼           ▼
///   table      stats       chart
/// ```
///
/// Everything downstream of the loader is a pure function of the
/// Dataset and the current control state, recomputed every frame.
pub mod chart;
pub mod loader;
pub mod model;
pub mod stats;
pub mod view;

use thiserror::Error;

/// Error taxonomy of the dashboard pipeline.
///
/// `DataUnavailable` is fatal at startup; the two column-count errors
/// are recoverable and surface as warnings in the affected view only.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    #[error("the dataset has no numeric columns to analyze")]
    NoNumericColumns,

    #[error("the dataset needs at least two numeric columns for charting")]
    InsufficientNumericColumns,
}

impl From<csv::Error> for DashError {
    fn from(e: csv::Error) -> Self {
        DashError::DataUnavailable(e.to_string())
    }
}
