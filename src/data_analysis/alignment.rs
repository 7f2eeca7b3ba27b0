// src/data_analysis/alignment.rs

use std::ops::Range;
use tracing::debug;

use crate::data_input::path_data::{PathPair, PathSample, PathSeries, PathType};
use crate::error::{AnalysisError, AnalysisResult};

/// Index ranges that restrict both series to the common `path_length` domain.
///
/// Borrows the series; samples are never copied or resampled.
#[derive(Debug, Clone)]
pub struct AlignedView<'a> {
    pair: &'a PathPair,
    limit: f64,
    original_range: Range<usize>,
    optimized_range: Range<usize>,
}

/// Truncates both series to samples with `path_length <= min(max_a, max_b)`.
///
/// If either series is empty, both ranges are empty.
pub fn align(pair: &PathPair) -> AlignedView<'_> {
    if pair.original.is_empty() || pair.optimized.is_empty() {
        return AlignedView {
            pair,
            limit: f64::NAN,
            original_range: 0..0,
            optimized_range: 0..0,
        };
    }

    let limit = pair
        .original
        .max_path_length()
        .min(pair.optimized.max_path_length());
    let original_range = truncated_range(&pair.original, limit);
    let optimized_range = truncated_range(&pair.optimized, limit);
    debug!(
        "Aligned domain: path_length <= {:.3} ({} original, {} optimized samples)",
        limit,
        original_range.len(),
        optimized_range.len()
    );

    AlignedView {
        pair,
        limit,
        original_range,
        optimized_range,
    }
}

// path_length is non-decreasing, so the qualifying samples form a prefix.
fn truncated_range(series: &PathSeries, limit: f64) -> Range<usize> {
    let end = series.samples().partition_point(|s| s.path_length <= limit);
    0..end
}

impl<'a> AlignedView<'a> {
    /// Upper bound of the common domain. NaN when no comparison is possible.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn range(&self, path_type: PathType) -> Range<usize> {
        match path_type {
            PathType::Original => self.original_range.clone(),
            PathType::Optimized => self.optimized_range.clone(),
        }
    }

    /// Samples of one series inside the common domain.
    pub fn samples(&self, path_type: PathType) -> &'a [PathSample] {
        &self.pair.get(path_type).samples()[self.range(path_type)]
    }

    /// True when at least one series has no sample in the common domain.
    pub fn is_empty(&self) -> bool {
        self.original_range.is_empty() || self.optimized_range.is_empty()
    }

    /// Fails with [`AnalysisError::EmptyAlignedDomain`] when there is nothing to compare.
    pub fn require_non_empty(&self) -> AnalysisResult<()> {
        if self.is_empty() {
            return Err(AnalysisError::EmptyAlignedDomain {
                baseline_max: self.pair.original.max_path_length(),
                optimized_max: self.pair.optimized.max_path_length(),
            });
        }
        Ok(())
    }
}


// src/data_analysis/alignment.rs
