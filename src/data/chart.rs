use super::view::TableView;
use super::DashError;

/// Row cap for line charts. Deliberately independent of the sample-size
/// control: a line over more rows than this is unreadable, so only the
/// first 50 rows of the view are ever plotted.
pub const LINE_ROW_LIMIT: usize = 50;

// ---------------------------------------------------------------------------
// ChartRequest – what the user asked for
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    BoxPlot,
    Scatter,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Histogram,
        ChartKind::BoxPlot,
        ChartKind::Scatter,
        ChartKind::Line,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Histogram => "Histogram",
            ChartKind::BoxPlot => "Box Plot",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Line => "Line Chart",
        }
    }

    /// Scatter and Line plot one column against another; the other two
    /// kinds describe a single column.
    pub fn needs_y(self) -> bool {
        matches!(self, ChartKind::Scatter | ChartKind::Line)
    }
}

#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub x: Option<String>,
    pub y: Option<String>,
}

// ---------------------------------------------------------------------------
// ChartSpec – declarative chart description handed to the renderer
// ---------------------------------------------------------------------------

/// One histogram bucket: center of the bin and the number of values in it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub count: usize,
}

/// Five-number summary backing a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// The declarative output of the builder. Rendering (axes, colors,
/// interaction) is entirely the plot widget's business.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Histogram {
        title: String,
        bin_width: f64,
        bins: Vec<HistogramBin>,
    },
    BoxPlot {
        title: String,
        summary: BoxSummary,
    },
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
    },
    Line {
        title: String,
        x_label: String,
        y_label: String,
        points: Vec<[f64; 2]>,
    },
    /// Nothing to draw yet: columns unselected or with no usable values.
    Placeholder { hint: String },
}

/// Build a chart spec from the sampled view and the user's request.
///
/// Errors with [`DashError::InsufficientNumericColumns`] when the view
/// has fewer than two numeric columns; unselected or empty columns give
/// a [`ChartSpec::Placeholder`] instead of an error.
pub fn build_chart(view: &TableView, request: &ChartRequest) -> Result<ChartSpec, DashError> {
    if view.numeric_columns().len() < 2 {
        return Err(DashError::InsufficientNumericColumns);
    }

    let Some(x) = request.x.as_deref() else {
        return Ok(placeholder());
    };

    match request.kind {
        ChartKind::Histogram => Ok(histogram_spec(view, x)),
        ChartKind::BoxPlot => {
            let mut values = view.numeric_values(x);
            if values.is_empty() {
                return Ok(placeholder());
            }
            values.sort_by(f64::total_cmp);
            Ok(ChartSpec::BoxPlot {
                title: format!("Box Plot of {x}"),
                summary: five_number(&values),
            })
        }
        ChartKind::Scatter => {
            let Some(y) = request.y.as_deref() else {
                return Ok(placeholder());
            };
            let points = view.paired_values(x, y, view.n_rows());
            Ok(ChartSpec::Scatter {
                title: format!("{x} vs {y}"),
                x_label: x.to_string(),
                y_label: y.to_string(),
                points,
            })
        }
        ChartKind::Line => {
            let Some(y) = request.y.as_deref() else {
                return Ok(placeholder());
            };
            // Always the leading rows of the view, never the full sample.
            let points = view.paired_values(x, y, LINE_ROW_LIMIT);
            Ok(ChartSpec::Line {
                title: format!("{x} vs {y}"),
                x_label: x.to_string(),
                y_label: y.to_string(),
                points,
            })
        }
    }
}

/// Histogram spec over one column. Also used by the statistics view,
/// which needs a distribution drawing but only one numeric column.
pub fn histogram_spec(view: &TableView, column: &str) -> ChartSpec {
    let values = view.numeric_values(column);
    if values.is_empty() {
        return placeholder();
    }
    let (bin_width, bins) = histogram_bins(&values);
    ChartSpec::Histogram {
        title: format!("Distribution of {column}"),
        bin_width,
        bins,
    }
}

fn placeholder() -> ChartSpec {
    ChartSpec::Placeholder {
        hint: "Select chart columns to draw".to_string(),
    }
}

/// Bucket values into equal-width bins, Sturges' rule for the count.
fn histogram_bins(values: &[f64]) -> (f64, Vec<HistogramBin>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let n_bins = (1.0 + (values.len() as f64).log2()).ceil().max(1.0) as usize;
    let span = max - min;
    if span <= 0.0 {
        // Degenerate: all values identical, one bin holds everything.
        return (
            1.0,
            vec![HistogramBin {
                center: min,
                count: values.len(),
            }],
        );
    }
    let bin_width = span / n_bins as f64;

    let mut counts = vec![0usize; n_bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * bin_width,
            count,
        })
        .collect();
    (bin_width, bins)
}

fn five_number(sorted: &[f64]) -> BoxSummary {
    let q = |p: f64| {
        let n = sorted.len();
        if n == 1 {
            return sorted[0];
        }
        let pos = p * (n - 1) as f64;
        let lo = pos.floor() as usize;
        let frac = pos - lo as f64;
        if frac == 0.0 {
            sorted[lo]
        } else {
            sorted[lo] * (1.0 - frac) + sorted[lo + 1] * frac
        }
    };
    BoxSummary {
        min: sorted[0],
        q25: q(0.25),
        median: q(0.50),
        q75: q(0.75),
        max: sorted[sorted.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dataset;

    fn numeric_view(n_rows: usize) -> TableView {
        let records: Vec<Vec<String>> = (0..n_rows)
            .map(|i| {
                vec![
                    format!("Student{i}"),
                    format!("{}", 40 + (i * 7) % 60),
                    format!("{}", 35 + (i * 11) % 65),
                ]
            })
            .collect();
        let ds = Dataset::from_records(
            vec!["Name".into(), "Math".into(), "Science".into()],
            records,
        );
        TableView::build(&ds, &ds.columns.clone(), n_rows, "")
    }

    fn request(kind: ChartKind, x: Option<&str>, y: Option<&str>) -> ChartRequest {
        ChartRequest {
            kind,
            x: x.map(String::from),
            y: y.map(String::from),
        }
    }

    #[test]
    fn line_chart_caps_at_fifty_rows() {
        let view = numeric_view(120);
        let spec = build_chart(
            &view,
            &request(ChartKind::Line, Some("Math"), Some("Science")),
        )
        .unwrap();
        match spec {
            ChartSpec::Line { points, .. } => assert_eq!(points.len(), 50),
            other => panic!("expected a line spec, got {other:?}"),
        }
    }

    #[test]
    fn line_chart_uses_all_rows_when_view_is_small() {
        let view = numeric_view(30);
        let spec = build_chart(
            &view,
            &request(ChartKind::Line, Some("Math"), Some("Science")),
        )
        .unwrap();
        match spec {
            ChartSpec::Line { points, .. } => assert_eq!(points.len(), 30),
            other => panic!("expected a line spec, got {other:?}"),
        }
    }

    #[test]
    fn scatter_uses_the_full_view() {
        let view = numeric_view(120);
        let spec = build_chart(
            &view,
            &request(ChartKind::Scatter, Some("Math"), Some("Science")),
        )
        .unwrap();
        match spec {
            ChartSpec::Scatter { points, .. } => assert_eq!(points.len(), 120),
            other => panic!("expected a scatter spec, got {other:?}"),
        }
    }

    #[test]
    fn histogram_counts_every_value() {
        let view = numeric_view(64);
        let spec = build_chart(&view, &request(ChartKind::Histogram, Some("Math"), None)).unwrap();
        match spec {
            ChartSpec::Histogram { bins, .. } => {
                let total: usize = bins.iter().map(|b| b.count).sum();
                assert_eq!(total, 64);
                // Sturges: 1 + log2(64) = 7 bins.
                assert_eq!(bins.len(), 7);
            }
            other => panic!("expected a histogram spec, got {other:?}"),
        }
    }

    #[test]
    fn box_plot_summary_is_ordered() {
        let view = numeric_view(40);
        let spec = build_chart(&view, &request(ChartKind::BoxPlot, Some("Science"), None)).unwrap();
        match spec {
            ChartSpec::BoxPlot { summary, .. } => {
                assert!(summary.min <= summary.q25);
                assert!(summary.q25 <= summary.median);
                assert!(summary.median <= summary.q75);
                assert!(summary.q75 <= summary.max);
            }
            other => panic!("expected a box spec, got {other:?}"),
        }
    }

    #[test]
    fn missing_columns_give_a_placeholder() {
        let view = numeric_view(10);
        let spec = build_chart(&view, &request(ChartKind::Scatter, Some("Math"), None)).unwrap();
        assert!(matches!(spec, ChartSpec::Placeholder { .. }));
        let spec = build_chart(&view, &request(ChartKind::Histogram, None, None)).unwrap();
        assert!(matches!(spec, ChartSpec::Placeholder { .. }));
    }

    #[test]
    fn one_numeric_column_is_insufficient() {
        let ds = Dataset::from_records(
            vec!["Name".into(), "Math".into()],
            vec![vec!["a".into(), "1".into()], vec!["b".into(), "2".into()]],
        );
        let view = TableView::build(&ds, &ds.columns.clone(), 2, "");
        let err = build_chart(&view, &request(ChartKind::Histogram, Some("Math"), None));
        assert!(matches!(err, Err(DashError::InsufficientNumericColumns)));
    }
}
