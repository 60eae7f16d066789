//! End-to-end pipeline scenarios: load → view → stats/charts, exercised
//! the way the dashboard drives them, without any UI in the loop.

use std::io::Write;

use anyhow::Result;

use marksboard::data::chart::{build_chart, ChartKind, ChartRequest, ChartSpec};
use marksboard::data::loader;
use marksboard::data::model::{CellValue, Dataset};
use marksboard::data::stats::summarize;
use marksboard::data::view::TableView;
use marksboard::data::DashError;
use marksboard::state::AppState;

/// 120 students across the canonical columns, every tenth mark missing.
fn marks_dataset() -> Dataset {
    let records: Vec<Vec<String>> = (0..120)
        .map(|i| {
            let math = if i % 10 == 3 {
                String::new()
            } else {
                format!("{}", 40 + (i * 7) % 60)
            };
            vec![
                format!("Student{i}"),
                math,
                format!("{}", 35 + (i * 11) % 65),
                format!("{}", 30 + (i * 13) % 70),
                ["A", "B", "C", "D"][i % 4].to_string(),
            ]
        })
        .collect();
    Dataset::from_records(
        vec![
            "Name".into(),
            "Math".into(),
            "Science".into(),
            "English".into(),
            "Grade".into(),
        ],
        records,
    )
}

#[test]
fn default_state_matches_the_dataset() {
    let ds = marks_dataset();
    let state = AppState::new(&ds);
    assert_eq!(
        state.selected_columns,
        vec!["Name", "Math", "Science", "English", "Grade"]
    );
    assert_eq!(state.sample_size, 100);
    assert_eq!(state.stat_target, Some("Math".into()));
    assert_eq!(state.chart_x, Some("Math".into()));
    assert_eq!(state.chart_y, Some("Science".into()));
}

#[test]
fn table_mode_search_scans_the_sampled_prefix() {
    let ds = marks_dataset();
    let state = AppState::new(&ds);
    let view = TableView::build(&ds, &state.selected_columns, state.sample_size, "A");

    assert!(!view.is_empty());
    assert!(view.n_rows() <= 100);
    let needle = "a";
    for row in &view.rows {
        assert!(
            row.iter().any(|cell| cell.contains_ci(needle)),
            "row without a match slipped through: {row:?}"
        );
    }
    // Grade "A" rows are i % 4 == 0, so Student100+ must not appear.
    for row in &view.rows {
        if let CellValue::Text(name) = &row[0] {
            let idx: usize = name.trim_start_matches("Student").parse().unwrap();
            assert!(idx < 100, "row {idx} is beyond the sampled prefix");
        }
    }
}

#[test]
fn line_chart_plots_exactly_fifty_rows_of_a_big_sample() -> Result<()> {
    let ds = marks_dataset();
    let view = TableView::build(&ds, &ds.columns, 120, "");
    let spec = build_chart(
        &view,
        &ChartRequest {
            kind: ChartKind::Line,
            x: Some("Science".into()),
            y: Some("English".into()),
        },
    )?;
    match spec {
        ChartSpec::Line { points, .. } => assert_eq!(points.len(), 50),
        other => panic!("expected a line spec, got {other:?}"),
    }
    Ok(())
}

#[test]
fn statistics_skip_missing_marks() -> Result<()> {
    let ds = marks_dataset();
    let view = TableView::build(&ds, &ds.columns, 100, "");
    let summary = summarize(&view, "Math")?;
    // Every tenth row of the 100-row prefix has no Math mark.
    assert_eq!(summary.count, 90);
    assert!(summary.count <= view.n_rows());
    assert!(summary.min >= 40.0 && summary.max < 100.0);
    Ok(())
}

#[test]
fn text_only_dataset_yields_no_numeric_columns() {
    let ds = Dataset::from_records(
        vec!["Name".into(), "Grade".into()],
        vec![
            vec!["Alice".into(), "A".into()],
            vec!["Bob".into(), "B".into()],
        ],
    );
    let view = TableView::build(&ds, &ds.columns, 10, "");
    assert!(matches!(
        summarize(&view, "Grade"),
        Err(DashError::NoNumericColumns)
    ));
    assert!(matches!(
        build_chart(
            &view,
            &ChartRequest {
                kind: ChartKind::Histogram,
                x: Some("Grade".into()),
                y: None,
            }
        ),
        Err(DashError::InsufficientNumericColumns)
    ));
}

#[test]
fn missing_file_is_fatal_before_any_ui() {
    let err = loader::load("no_such_dataset.csv").unwrap_err();
    assert!(matches!(err, DashError::DataUnavailable(_)));
}

#[test]
fn loader_memoizes_across_calls() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "Name,Math")?;
    writeln!(file, "Alice,90")?;
    file.flush()?;

    let first = loader::load_cached(file.path())?;
    let path = file.path().to_path_buf();
    drop(file); // file is gone, the cache is not

    let second = loader::load_cached(&path)?;
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.n_rows(), 1);
    Ok(())
}
