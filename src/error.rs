// src/error.rs

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::data_input::path_data::PathType;

/// Errors raised while loading, analysing or rendering a path comparison.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file not found or unreadable: {}: {source}", path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("required column '{column}' is missing from the input header")]
    MissingColumn { column: &'static str },
    #[error("no rows found for the {path_type} path")]
    MissingSeries { path_type: PathType },
    #[error("the {path_type} path has no samples")]
    EmptySeries { path_type: PathType },
    #[error(
        "the {path_type} path has decreasing path_length at sample {index} ({previous} -> {current})"
    )]
    NonMonotonicPathLength {
        path_type: PathType,
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error(
        "no common path_length domain (original max {baseline_max:.3}, optimized max {optimized_max:.3}); detailed charts cannot be drawn"
    )]
    EmptyAlignedDomain { baseline_max: f64, optimized_max: f64 },
    #[error("chart rendering failed: {0}")]
    Render(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for AnalysisError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        AnalysisError::Render(err.to_string())
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

// src/error.rs
