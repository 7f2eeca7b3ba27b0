// src/data_input/path_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::data_input::path_data::{PathPair, PathSample, PathSeries, PathType};
use crate::error::{AnalysisError, AnalysisResult};

// Column positions inside REQUIRED_HEADERS.
const COL_PATH_TYPE: usize = 0;
const COL_X: usize = 1;
const COL_Y: usize = 2;
const COL_PATH_LENGTH: usize = 3;
const COL_CURVATURE: usize = 4;
const COL_THETA: usize = 5;
const COL_STEERING_ANGLE: usize = 6;
const COL_OBSTACLE_DISTANCE: usize = 7;

/// Columns the analysis cannot run without.
pub const REQUIRED_HEADERS: [&str; 8] = [
    "path_type",
    "x",
    "y",
    "path_length",
    "curvature",
    "theta",
    "steering_angle",
    "obstacle_distance",
];

/// Columns written by the recorder that the analysis does not read.
pub const OPTIONAL_HEADERS: [&str; 2] = ["point_index", "segment_length"];

/// Opens and parses the recorded path CSV, returning both series.
pub fn parse_path_file(input_file_path: &Path) -> AnalysisResult<PathPair> {
    let file = File::open(input_file_path).map_err(|source| AnalysisError::MissingInput {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    info!("Reading path data from '{}'", input_file_path.display());
    parse_path_csv(BufReader::new(file))
}

/// Parses path CSV content from any reader.
///
/// Rows may list the two path types interleaved or grouped; relative order within each
/// type is kept. Rows with an unknown `path_type` or an unparseable number are skipped
/// with a warning. A missing required column aborts the parse.
pub fn parse_path_csv<R: Read>(reader: R) -> AnalysisResult<PathPair> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // --- Header Mapping ---
    let header_record = reader.headers()?.clone();
    debug!("Headers found in CSV: {:?}", header_record);

    let mut header_indices = [0usize; REQUIRED_HEADERS.len()];
    for (target_idx, &target_header) in REQUIRED_HEADERS.iter().enumerate() {
        match header_record.iter().position(|h| h.trim() == target_header) {
            Some(csv_idx) => header_indices[target_idx] = csv_idx,
            None => return Err(AnalysisError::MissingColumn { column: target_header }),
        }
    }
    for optional in OPTIONAL_HEADERS {
        let found = header_record.iter().any(|h| h.trim() == optional);
        debug!(
            "  '{}': {} (Optional, not used by the comparison)",
            optional,
            if found { "Found" } else { "Not Found" }
        );
    }

    // --- Data Reading and Partitioning ---
    let mut original_samples: Vec<PathSample> = Vec::new();
    let mut optimized_samples: Vec<PathSample> = Vec::new();
    let mut skipped_rows = 0usize;

    for (row_index, result) in reader.records().enumerate() {
        let row_number = row_index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to CSV read error: {}", row_number, e);
                skipped_rows += 1;
                continue;
            }
        };

        match parse_row(&record, &header_indices, row_number) {
            Ok(Some(sample)) => match sample.path_type {
                PathType::Original => original_samples.push(sample),
                PathType::Optimized => optimized_samples.push(sample),
            },
            Ok(None) => {
                let label = record.get(header_indices[COL_PATH_TYPE]).unwrap_or("");
                warn!("Skipping row {} with unknown path_type '{}'", row_number, label);
                skipped_rows += 1;
            }
            Err(e) => {
                warn!("Skipping row {}: {}", row_number, e);
                skipped_rows += 1;
            }
        }
    }

    info!(
        "Finished reading rows: {} original, {} optimized, {} skipped.",
        original_samples.len(),
        optimized_samples.len(),
        skipped_rows
    );

    if original_samples.is_empty() {
        return Err(AnalysisError::MissingSeries {
            path_type: PathType::Original,
        });
    }
    if optimized_samples.is_empty() {
        return Err(AnalysisError::MissingSeries {
            path_type: PathType::Optimized,
        });
    }

    Ok(PathPair::new(
        PathSeries::new(PathType::Original, original_samples)?,
        PathSeries::new(PathType::Optimized, optimized_samples)?,
    ))
}

/// Converts one record into a sample. Returns `Ok(None)` for an unrecognised path type.
fn parse_row(
    record: &StringRecord,
    header_indices: &[usize; REQUIRED_HEADERS.len()],
    row_number: usize,
) -> AnalysisResult<Option<PathSample>> {
    let field = |target_idx: usize| record.get(header_indices[target_idx]).unwrap_or("").trim();

    let path_type = match PathType::from_label(field(COL_PATH_TYPE)) {
        Some(path_type) => path_type,
        None => return Ok(None),
    };

    let parse_f64 = |target_idx: usize| -> AnalysisResult<f64> {
        let raw = field(target_idx);
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AnalysisError::InvalidValue {
                row: row_number,
                column: REQUIRED_HEADERS[target_idx],
                value: raw.to_string(),
            })
    };

    // An empty steering cell means "undefined", not zero.
    let steering_angle = if field(COL_STEERING_ANGLE).is_empty() {
        None
    } else {
        Some(parse_f64(COL_STEERING_ANGLE)?)
    };

    Ok(Some(PathSample {
        x: parse_f64(COL_X)?,
        y: parse_f64(COL_Y)?,
        path_length: parse_f64(COL_PATH_LENGTH)?,
        curvature: parse_f64(COL_CURVATURE)?,
        theta: parse_f64(COL_THETA)?,
        steering_angle,
        obstacle_distance: parse_f64(COL_OBSTACLE_DISTANCE)?,
        path_type,
    }))
}


// src/data_input/path_parser.rs
