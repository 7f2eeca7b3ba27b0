// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, GREY, RED};
use plotters::style::RGBColor;

// Composite figure dimensions (2 x 3 grid).
pub const COMPOSITE_PLOT_WIDTH: u32 = 2400;
pub const COMPOSITE_PLOT_HEIGHT: u32 = 1920;
pub const COMPOSITE_GRID_ROWS: usize = 2;
pub const COMPOSITE_GRID_COLS: usize = 3;

// Detailed single-metric chart dimensions.
pub const DETAILED_PLOT_WIDTH: u32 = 1800;
pub const DETAILED_PLOT_HEIGHT: u32 = 1200;

// Space reserved above the composite grid for the figure title.
pub const MAIN_TITLE_AREA_PX: u32 = 60;

// Chart frame: outer margin and label areas around the plotting region.
pub const CHART_MARGIN_PX: u32 = 5;
pub const X_LABEL_AREA_PX: u32 = 50;
pub const Y_LABEL_AREA_PX: u32 = 60;

// --- Output Artifacts ---
pub const COMPOSITE_OUTPUT_FILE: &str = "path_comparison.png";
pub const REPORT_OUTPUT_FILE: &str = "path_comparison_report.csv";
pub const COMPOSITE_TITLE: &str = "Path Parameter Comparison: Original vs Optimized";

// --- Plot Color Assignments ---
pub const COLOR_ORIGINAL_PATH: &RGBColor = &BLUE;
pub const COLOR_OPTIMIZED_PATH: &RGBColor = &RED;
pub const COLOR_TABLE_BORDER: &RGBColor = &GREY;
pub const COLOR_TABLE_HEADER_FILL: RGBColor = RGBColor(230, 230, 240);

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 3;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 32;
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 16;
pub const FONT_SIZE_MESSAGE: i32 = 22;
pub const FONT_SIZE_TABLE: i32 = 18;

// --- Comparison Table ---
pub const REPORT_HEADER: [&str; 4] = ["Parameter", "Original Path", "Optimized Path", "Change (%)"];
// Relative column widths; must sum to 1.0.
pub const TABLE_COLUMN_WIDTHS: [f64; 4] = [0.34, 0.22, 0.22, 0.22];
pub const TABLE_WIDTH_FRACTION: f64 = 0.9;
// Row height as a multiple of the table font size.
pub const TABLE_ROW_HEIGHT_SCALE: f64 = 2.4;
pub const PERCENT_PRECISION: usize = 2;

// --- Clearance Search ---
pub const CLEARANCE_SEARCH_RADIUS_M: f64 = 10.0;

// src/constants.rs
