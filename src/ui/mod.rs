/// UI layer: side-panel controls plus one render module per view mode.
/// Widgets and layout belong to egui; these functions only wire the
/// control state to the data pipeline and draw its output.
pub mod panels;
pub mod plot;
pub mod stats_view;
pub mod table_view;
