//! Marksboard: a single-page CSV dataset dashboard.
//!
//! One CSV file is loaded at startup into a process-wide memoized
//! [`data::model::Dataset`]; everything the user sees is a pure
//! function of that dataset and the current [`state::AppState`],
//! recomputed on every frame.
pub mod app;
pub mod data;
pub mod state;
pub mod ui;
