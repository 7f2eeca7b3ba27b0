// src/data_input/path_writer.rs

use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::data_analysis::path_metrics::PoseDescriptor;
use crate::data_input::path_data::PathType;
use crate::error::{AnalysisError, AnalysisResult};

/// Header written by the path recorder.
pub const RECORDED_HEADERS: [&str; 10] = [
    "path_type",
    "point_index",
    "x",
    "y",
    "theta",
    "curvature",
    "obstacle_distance",
    "path_length",
    "segment_length",
    "steering_angle",
];

/// Writes both analysed paths to `output_file_path`, original rows first.
pub fn write_paths_file(
    output_file_path: &Path,
    original: &[PoseDescriptor],
    optimized: &[PoseDescriptor],
) -> AnalysisResult<()> {
    let file = File::create(output_file_path)?;
    write_paths_csv(file, original, optimized)?;
    info!("Path analysis CSV saved as '{}'.", output_file_path.display());
    Ok(())
}

/// Writes both analysed paths as CSV with fixed 6-decimal precision.
///
/// The first sample's undefined steering angle is written as `0.000000`.
pub fn write_paths_csv<W: Write>(
    writer: W,
    original: &[PoseDescriptor],
    optimized: &[PoseDescriptor],
) -> AnalysisResult<()> {
    if original.is_empty() {
        return Err(AnalysisError::EmptySeries {
            path_type: PathType::Original,
        });
    }
    if optimized.is_empty() {
        return Err(AnalysisError::EmptySeries {
            path_type: PathType::Optimized,
        });
    }

    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(RECORDED_HEADERS)?;
    for (path_type, descriptors) in [
        (PathType::Original, original),
        (PathType::Optimized, optimized),
    ] {
        for d in descriptors {
            let s = &d.sample;
            csv_writer.write_record([
                path_type.csv_label().to_string(),
                d.point_index.to_string(),
                format!("{:.6}", s.x),
                format!("{:.6}", s.y),
                format!("{:.6}", s.theta),
                format!("{:.6}", s.curvature),
                format!("{:.6}", s.obstacle_distance),
                format!("{:.6}", s.path_length),
                format!("{:.6}", d.segment_length),
                format!("{:.6}", s.steering_angle.unwrap_or(0.0)),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}


// src/data_input/path_writer.rs
