// src/types.rs
// Type aliases shared by the analysis and plotting modules.

use std::ops::Range;

/// `(path_length, value)` points of one plotted line.
pub type SeriesPoints = Vec<(f64, f64)>;

/// Rows of the comparison table: header first, then one row per comparison.
pub type TableCells = Vec<[String; 4]>;

/// Pixel rectangle `((x0, y0), (x1, y1))` relative to its drawing area.
pub type PixelRect = ((i32, i32), (i32, i32));

/// X and Y data ranges of one chart.
pub type ChartRanges = (Range<f64>, Range<f64>);

// src/types.rs
