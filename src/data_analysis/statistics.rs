// src/data_analysis/statistics.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // .min() / .max() on Array1
use std::fmt;

use crate::data_input::path_data::{PathSeries, PathType};

/// A statistic that may be undefined (empty sample set, zero denominator).
///
/// Rendered as "N/A" when undefined; never carries an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Value(f64),
    Undefined,
}

impl StatValue {
    /// Maps `None` and non-finite numbers to `Undefined`.
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => StatValue::Value(v),
            _ => StatValue::Undefined,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            StatValue::Value(v) => Some(v),
            StatValue::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, StatValue::Undefined)
    }

    /// Fixed-precision text, or "N/A".
    pub fn format(self, precision: usize) -> String {
        match self {
            StatValue::Value(v) => format!("{v:.precision$}"),
            StatValue::Undefined => "N/A".to_string(),
        }
    }

    /// Fixed-precision percentage with a trailing `%`, or "N/A".
    pub fn format_percent(self, precision: usize) -> String {
        match self {
            StatValue::Value(v) => format!("{v:.precision$}%"),
            StatValue::Undefined => "N/A".to_string(),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Value(v) => write!(f, "{v}"),
            StatValue::Undefined => f.write_str("N/A"),
        }
    }
}

/// `((o - b) / b) * 100`, or `Undefined` for a zero or undefined operand.
pub fn percent_change(baseline: StatValue, optimized: StatValue) -> StatValue {
    match (baseline, optimized) {
        (StatValue::Value(b), StatValue::Value(o)) if b != 0.0 => {
            StatValue::from_option(Some((o - b) / b * 100.0))
        }
        _ => StatValue::Undefined,
    }
}

/// Max, mean, min and sample variance of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStats {
    pub max: StatValue,
    pub mean: StatValue,
    pub min: StatValue,
    pub variance: StatValue,
    pub count: usize,
}

impl MetricStats {
    /// Summarises `values`. Empty input gives all-`Undefined` statistics;
    /// variance needs at least two values (denominator `n - 1`).
    pub fn from_values(values: &[f64]) -> Self {
        let arr = Array1::from(values.to_vec());
        let variance = if arr.len() >= 2 {
            StatValue::from_option(Some(arr.var(1.0)))
        } else {
            StatValue::Undefined
        };
        Self {
            max: StatValue::from_option(arr.max().ok().copied()),
            mean: StatValue::from_option(arr.mean()),
            min: StatValue::from_option(arr.min().ok().copied()),
            variance,
            count: arr.len(),
        }
    }
}

/// Aggregates of one series over its full, unaligned extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateStatistics {
    pub path_type: PathType,
    /// Total length, i.e. the maximum cumulative `path_length`.
    pub path_length: StatValue,
    pub curvature: MetricStats,
    pub obstacle_distance: MetricStats,
    /// Computed from the second sample onward.
    pub steering_angle: MetricStats,
}

impl AggregateStatistics {
    pub fn compute(series: &PathSeries) -> Self {
        let path_length = MetricStats::from_values(&series.values(|s| s.path_length)).max;
        Self {
            path_type: series.path_type(),
            path_length,
            curvature: MetricStats::from_values(&series.values(|s| s.curvature)),
            obstacle_distance: MetricStats::from_values(&series.values(|s| s.obstacle_distance)),
            steering_angle: MetricStats::from_values(&series.steering_angles()),
        }
    }
}


// src/data_analysis/statistics.rs
