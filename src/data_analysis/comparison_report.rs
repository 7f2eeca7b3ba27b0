// src/data_analysis/comparison_report.rs

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::constants::{PERCENT_PRECISION, REPORT_HEADER};
use crate::data_analysis::statistics::{percent_change, AggregateStatistics, StatValue};
use crate::data_input::path_data::PathPair;
use crate::error::AnalysisResult;
use crate::types::TableCells;

/// Number of rows in every report.
pub const REPORT_ROW_COUNT: usize = 6;

/// One line of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub parameter: &'static str,
    pub baseline: StatValue,
    pub optimized: StatValue,
    pub percent_change: StatValue,
    /// Decimal places used when presenting the two values.
    pub precision: usize,
}

impl ComparisonRow {
    fn new(
        parameter: &'static str,
        baseline: StatValue,
        optimized: StatValue,
        precision: usize,
    ) -> Self {
        Self {
            parameter,
            baseline,
            optimized,
            percent_change: percent_change(baseline, optimized),
            precision,
        }
    }

    /// `[parameter, original, optimized, change]` as presented in the table.
    pub fn cells(&self) -> [String; 4] {
        [
            self.parameter.to_string(),
            self.baseline.format(self.precision),
            self.optimized.format(self.precision),
            self.percent_change.format_percent(PERCENT_PRECISION),
        ]
    }
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    parameter: &'a str,
    original: String,
    optimized: String,
    change_percent: String,
}

/// Fixed-order comparison of the two paths.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub rows: [ComparisonRow; REPORT_ROW_COUNT],
}

impl ComparisonReport {
    /// Builds the six rows: total length, average and maximum curvature, average and
    /// minimum obstacle distance, steering variance. Rows are never dropped or reordered.
    pub fn build(baseline: &AggregateStatistics, optimized: &AggregateStatistics) -> Self {
        let rows = [
            ComparisonRow::new(
                "Total Path Length",
                baseline.path_length,
                optimized.path_length,
                2,
            ),
            ComparisonRow::new(
                "Average Curvature",
                baseline.curvature.mean,
                optimized.curvature.mean,
                6,
            ),
            ComparisonRow::new(
                "Maximum Curvature",
                baseline.curvature.max,
                optimized.curvature.max,
                6,
            ),
            ComparisonRow::new(
                "Average Obstacle Distance",
                baseline.obstacle_distance.mean,
                optimized.obstacle_distance.mean,
                2,
            ),
            ComparisonRow::new(
                "Minimum Obstacle Distance",
                baseline.obstacle_distance.min,
                optimized.obstacle_distance.min,
                2,
            ),
            ComparisonRow::new(
                "Steering Angle Variance",
                baseline.steering_angle.variance,
                optimized.steering_angle.variance,
                6,
            ),
        ];
        Self { rows }
    }

    /// Aggregates both full series and builds the report.
    pub fn from_pair(pair: &PathPair) -> Self {
        Self::build(
            &AggregateStatistics::compute(&pair.original),
            &AggregateStatistics::compute(&pair.optimized),
        )
    }

    /// Header row followed by one row of cells per comparison row.
    pub fn table_cells(&self) -> TableCells {
        let mut cells = Vec::with_capacity(REPORT_ROW_COUNT + 1);
        cells.push(REPORT_HEADER.map(str::to_string));
        cells.extend(self.rows.iter().map(ComparisonRow::cells));
        cells
    }

    /// Logs the table line by line.
    pub fn log_summary(&self) {
        for [parameter, original, optimized, change] in self.table_cells() {
            info!("  {:<27} {:>14} {:>14} {:>10}", parameter, original, optimized, change);
        }
    }

    /// Writes the report as CSV: `parameter,original,optimized,change_percent`.
    pub fn write_csv<W: Write>(&self, writer: W) -> AnalysisResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            let [parameter, original, optimized, change_percent] = row.cells();
            csv_writer.serialize(ReportRecord {
                parameter: &parameter,
                original,
                optimized,
                change_percent,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, output_file_path: &Path) -> AnalysisResult<()> {
        self.write_csv(File::create(output_file_path)?)?;
        info!("  Comparison report saved as '{}'.", output_file_path.display());
        Ok(())
    }
}


// src/data_analysis/comparison_report.rs
