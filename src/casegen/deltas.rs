//! Before/after delta computation.
//!
//! Pure arithmetic over two [`MetricSnapshot`]s. Ratio metrics get a
//! relative percentage change with a zero-baseline guard; the qualified
//! rate is already a percentage, so its delta is reported in absolute
//! percentage points.

use crate::model::{DeltaSet, MetricSnapshot};

/// Computes the derived deltas for a baseline/after snapshot pair.
///
/// Total over numeric inputs: equal snapshots give zero deltas and
/// regressions come out negative.
pub fn compute_deltas(baseline: &MetricSnapshot, after: &MetricSnapshot) -> DeltaSet {
    DeltaSet {
        ramp_days_pct: pct_change(baseline.ramp_days, after.ramp_days),
        meetings_pct: pct_change(
            baseline.avg_meetings_per_rep_week,
            after.avg_meetings_per_rep_week,
        ),
        qualified_pp: round1(after.qualified_rate_pct - baseline.qualified_rate_pct),
    }
}

/// Relative percentage change, `0.0` when the baseline is not positive.
fn pct_change(baseline: f64, after: f64) -> f64 {
    if baseline > 0.0 {
        round1((after - baseline) / baseline * 100.0)
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
