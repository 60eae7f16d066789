use super::view::TableView;
use super::DashError;

// ---------------------------------------------------------------------------
// Summary – five-number-plus-moments description of one numeric column
// ---------------------------------------------------------------------------

/// Descriptive statistics of a single numeric column, computed over its
/// non-null values only.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute a [`Summary`] for `column` of the given view.
///
/// Errors with [`DashError::NoNumericColumns`] when the view holds no
/// numeric column at all; callers surface that as a warning and keep
/// the rest of the page alive. A numeric column whose sampled cells are
/// all null yields a `count` of 0 and NaN moments.
pub fn summarize(view: &TableView, column: &str) -> Result<Summary, DashError> {
    if view.numeric_columns().is_empty() {
        return Err(DashError::NoNumericColumns);
    }

    let mut values = view.numeric_values(column);
    values.sort_by(f64::total_cmp);

    let count = values.len();
    if count == 0 {
        return Ok(Summary {
            column: column.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        });
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    // Sample standard deviation (n - 1), NaN for a single value.
    let std = if count > 1 {
        let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Ok(Summary {
        column: column.to_string(),
        count,
        mean,
        std,
        min: values[0],
        q25: quantile_sorted(&values, 0.25),
        median: quantile_sorted(&values, 0.50),
        q75: quantile_sorted(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linear-interpolation quantile over an already sorted, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
