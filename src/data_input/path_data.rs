// src/data_input/path_data.rs

use std::fmt;

use crate::error::{AnalysisError, AnalysisResult};

/// Which planner output a sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// Baseline path, before the optimization pass.
    Original,
    Optimized,
}

impl PathType {
    /// Label used in the `path_type` column of the recorded CSV.
    pub fn csv_label(self) -> &'static str {
        match self {
            PathType::Original => "original",
            PathType::Optimized => "optimized",
        }
    }

    /// Legend label used on every chart.
    pub fn legend_label(self) -> &'static str {
        match self {
            PathType::Original => "Original Path",
            PathType::Optimized => "Optimized Path",
        }
    }

    /// Parses a `path_type` cell. Matching ignores case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("original") {
            Some(PathType::Original)
        } else if trimmed.eq_ignore_ascii_case("optimized") {
            Some(PathType::Optimized)
        } else {
            None
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.csv_label())
    }
}

/// One recorded point along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub x: f64,
    pub y: f64,
    /// Cumulative arc length from the path start.
    pub path_length: f64,
    pub curvature: f64,
    /// Heading (rad).
    pub theta: f64,
    /// Heading change to the previous sample (rad). `None` for the first sample.
    pub steering_angle: Option<f64>,
    pub obstacle_distance: f64,
    pub path_type: PathType,
}

/// Ordered samples of one path, sorted by non-decreasing `path_length`.
///
/// Construction validates the ordering once; the series is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSeries {
    path_type: PathType,
    samples: Vec<PathSample>,
}

impl PathSeries {
    /// Builds a series from samples in recorded order.
    ///
    /// The first sample's steering angle is cleared, since it has no predecessor.
    pub fn new(path_type: PathType, mut samples: Vec<PathSample>) -> AnalysisResult<Self> {
        if samples.is_empty() {
            return Err(AnalysisError::EmptySeries { path_type });
        }
        for (index, pair) in samples.windows(2).enumerate() {
            let (previous, current) = (pair[0].path_length, pair[1].path_length);
            if current < previous {
                return Err(AnalysisError::NonMonotonicPathLength {
                    path_type,
                    index: index + 1,
                    previous,
                    current,
                });
            }
        }
        for sample in samples.iter_mut() {
            sample.path_type = path_type;
        }
        samples[0].steering_angle = None;
        Ok(Self { path_type, samples })
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    pub fn samples(&self) -> &[PathSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest cumulative path length, i.e. the last sample's.
    pub fn max_path_length(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.path_length)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Extracts one column as `f64` values, in sample order.
    pub fn values<F>(&self, field: F) -> Vec<f64>
    where
        F: Fn(&PathSample) -> f64,
    {
        self.samples.iter().map(field).collect()
    }

    /// Steering angles from the second sample onward.
    pub fn steering_angles(&self) -> Vec<f64> {
        self.samples
            .iter()
            .skip(1)
            .filter_map(|s| s.steering_angle)
            .collect()
    }
}

/// The two series of one comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPair {
    pub original: PathSeries,
    pub optimized: PathSeries,
}

impl PathPair {
    pub fn new(original: PathSeries, optimized: PathSeries) -> Self {
        Self { original, optimized }
    }

    pub fn get(&self, path_type: PathType) -> &PathSeries {
        match path_type {
            PathType::Original => &self.original,
            PathType::Optimized => &self.optimized,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(path_length: f64, curvature: f64) -> PathSample {
    PathSample {
        x: path_length,
        y: 0.0,
        path_length,
        curvature,
        theta: 0.0,
        steering_angle: Some(0.0),
        obstacle_distance: 1.0,
        path_type: PathType::Original,
    }
}


// src/data_input/path_data.rs
