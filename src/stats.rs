//! Descriptive statistics over a single numeric column.

/// Step between reported percentiles.
pub const PERCENTILE_STEP: u32 = 5;

/// Count, extremes and centre of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl Summary {
    /// `None` for an empty column.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted(values);
        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        Some(Summary {
            count: n,
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median: quantile_sorted(&sorted, 0.5)?,
        })
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// The `q`-th quantile of sorted data, interpolating linearly between the
/// two closest ranks (`h = (n - 1) * q`).
///
/// Returns `None` for empty input or `q` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let h = (n - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let w = h - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * w)
}

/// Percentiles 0, 5, ..., 100 as `(percent, value)` pairs.
pub fn percentiles(values: &[f64]) -> Vec<(u32, f64)> {
    let sorted = sorted(values);
    (0..=100)
        .step_by(PERCENTILE_STEP as usize)
        .filter_map(|p| quantile_sorted(&sorted, f64::from(p) / 100.0).map(|v| (p, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMN: [f64; 4] = [40.0, 10.0, 30.0, 20.0];

    #[test]
    fn summary_of_four_values() {
        let s = Summary::from_values(&COLUMN).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 40.0);
        assert_eq!(s.mean, 25.0);
        assert_eq!(s.median, 25.0);
    }

    #[test]
    fn median_of_odd_count() {
        let s = Summary::from_values(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn empty_column_has_no_summary() {
        assert!(Summary::from_values(&[]).is_none());
        assert!(percentiles(&[]).is_empty());
    }

    #[test]
    fn percentiles_span_min_to_max() {
        let p = percentiles(&COLUMN);
        assert_eq!(p.len(), 21);
        assert_eq!(p[0], (0, 10.0));
        assert_eq!(p[20], (100, 40.0));
        assert_eq!(p[10], (50, 25.0));
        let labels: Vec<u32> = p.iter().map(|(pct, _)| *pct).collect();
        assert_eq!(labels, (0..=100u32).step_by(5).collect::<Vec<_>>());
    }

    #[test]
    fn interpolates_between_ranks() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        // h = 3 * 0.25 = 0.75
        assert!((quantile_sorted(&sorted, 0.25).unwrap() - 17.5).abs() < 1e-12);
        assert_eq!(quantile_sorted(&sorted, 1.5), None);
    }

    #[test]
    fn percentiles_are_monotonic() {
        let values = [5.0, -3.0, 12.5, 0.0, 7.25, 7.25, 100.0];
        let p = percentiles(&values);
        assert!(p.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn single_value() {
        let p = percentiles(&[7.0]);
        assert!(p.iter().all(|(_, v)| *v == 7.0));
    }
}
