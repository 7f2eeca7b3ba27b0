// src/plot_framework.rs

use plotters::backend::DrawingBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::ops::Range;

use crate::constants::{
    CHART_MARGIN_PX, COLOR_TABLE_BORDER, COLOR_TABLE_HEADER_FILL, FONT_SIZE_CHART_TITLE,
    FONT_SIZE_MESSAGE, FONT_SIZE_TABLE, LINE_WIDTH_LEGEND, TABLE_COLUMN_WIDTHS,
    TABLE_ROW_HEIGHT_SCALE, TABLE_WIDTH_FRACTION, X_LABEL_AREA_PX, Y_LABEL_AREA_PX,
};
use crate::error::AnalysisResult;
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MESSAGE,
    FONT_TUPLE_TABLE,
};
use crate::types::{ChartRanges, PixelRect, SeriesPoints};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Min/max of X and Y over every point of every series. `None` if there are no finite points.
pub fn data_bounds(series: &[PlotSeries]) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any_point = false;

    for &(x, y) in series.iter().flat_map(|s| s.data.iter()) {
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        any_point = true;
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    any_point.then_some(((x_min, x_max), (y_min, y_max)))
}

/// Widens one of the ranges so that one data unit spans the same number of pixels on both axes.
pub fn equal_aspect_ranges(
    x_range: Range<f64>,
    y_range: Range<f64>,
    width_px: u32,
    height_px: u32,
) -> ChartRanges {
    let x_span = x_range.end - x_range.start;
    let y_span = y_range.end - y_range.start;
    if width_px == 0 || height_px == 0 || x_span <= 0.0 || y_span <= 0.0 {
        return (x_range, y_range);
    }

    let (w, h) = (width_px as f64, height_px as f64);
    let units_per_px = (x_span / w).max(y_span / h);
    let (half_x, half_y) = (units_per_px * w / 2.0, units_per_px * h / 2.0);
    let x_center = (x_range.start + x_range.end) / 2.0;
    let y_center = (y_range.start + y_range.end) / 2.0;
    (
        (x_center - half_x)..(x_center + half_x),
        (y_center - half_y)..(y_center + half_y),
    )
}

/// Approximate size of the plotting region that `draw_line_chart` leaves inside an area.
pub fn plotting_area_size(area_width: u32, area_height: u32) -> (u32, u32) {
    let caption_px = (FONT_SIZE_CHART_TITLE as u32) + CHART_MARGIN_PX;
    (
        area_width.saturating_sub(2 * CHART_MARGIN_PX + Y_LABEL_AREA_PX),
        area_height.saturating_sub(2 * CHART_MARGIN_PX + X_LABEL_AREA_PX + caption_px),
    )
}

/// Lays out a table of `rows` rows, centred in an area of `area_width` x `area_height` pixels.
///
/// Columns take `column_widths` fractions of the table width; rows that do not fit are dropped.
pub fn table_cell_rects(
    area_width: i32,
    area_height: i32,
    rows: usize,
    column_widths: &[f64],
    row_height: i32,
) -> Vec<Vec<PixelRect>> {
    if rows == 0 || row_height <= 0 || area_width <= 0 || area_height <= 0 {
        return Vec::new();
    }
    let visible_rows = rows.min((area_height / row_height) as usize);
    let table_width = (area_width as f64 * TABLE_WIDTH_FRACTION) as i32;
    let table_height = visible_rows as i32 * row_height;
    let left = (area_width - table_width) / 2;
    let top = (area_height - table_height) / 2;

    let mut column_edges = Vec::with_capacity(column_widths.len() + 1);
    let mut acc = 0.0;
    column_edges.push(left);
    for w in column_widths {
        acc += w;
        column_edges.push(left + (acc * table_width as f64).round() as i32);
    }

    (0..visible_rows)
        .map(|row| {
            let y0 = top + row as i32 * row_height;
            column_edges
                .windows(2)
                .map(|edge| ((edge[0], y0), (edge[1], y0 + row_height)))
                .collect()
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct PlotSeries {
    pub data: SeriesPoints,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    /// Keep one data unit equally long on both axes (trajectory plots).
    pub equal_aspect: bool,
}

impl PlotConfig {
    /// Builds a line chart config with ranges fitted to the data.
    ///
    /// X is fitted tightly, Y gets padding. Both are padded when `equal_aspect` is set.
    /// Returns `None` when no series has a finite point.
    pub fn from_series(
        title: impl Into<String>,
        series: Vec<PlotSeries>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        equal_aspect: bool,
    ) -> Option<Self> {
        let ((x_min, x_max), (y_min, y_max)) = data_bounds(&series)?;
        let (x_lo, x_hi) = if equal_aspect || x_max - x_min < 1e-9 {
            calculate_range(x_min, x_max)
        } else {
            (x_min, x_max)
        };
        let (y_lo, y_hi) = calculate_range(y_min, y_max);
        Some(Self {
            title: title.into(),
            x_range: x_lo..x_hi,
            y_range: y_lo..y_hi,
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
            equal_aspect,
        })
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
    }

    pub fn valid_ranges(&self) -> bool {
        self.x_range.end > self.x_range.start && self.y_range.end > self.y_range.start
    }
}

/// Draw a "Data Unavailable" message centred in a plot area.
pub fn draw_unavailable_message<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot_type: &str,
    reason: &str,
) -> AnalysisResult<()> {
    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let line_offset = FONT_SIZE_MESSAGE / 2 + 4;
    let text_style = FONT_TUPLE_MESSAGE
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));

    area.draw(&Text::new(
        format!("{plot_type} Data Unavailable:"),
        (center.0, center.1 - line_offset),
        text_style.clone(),
    ))?;
    area.draw(&Text::new(
        reason.to_string(),
        (center.0, center.1 + line_offset),
        text_style,
    ))?;
    Ok(())
}

/// Draws one line chart with title, axis labels, grid and legend into `area`.
pub fn draw_line_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot_config: &PlotConfig,
) -> AnalysisResult<()> {
    let (x_range, y_range) = if plot_config.equal_aspect {
        let (w, h) = area.dim_in_pixel();
        let (plot_w, plot_h) = plotting_area_size(w, h);
        equal_aspect_ranges(
            plot_config.x_range.clone(),
            plot_config.y_range.clone(),
            plot_w,
            plot_h,
        )
    } else {
        (plot_config.x_range.clone(), plot_config.y_range.clone())
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN_PX)
        .x_label_area_size(X_LABEL_AREA_PX)
        .y_label_area_size(Y_LABEL_AREA_PX)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().copied(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Draws a chart, or the unavailable message when the config is missing or unusable.
/// Returns whether a chart was drawn.
pub fn draw_chart_or_placeholder<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot_config: Option<&PlotConfig>,
    plot_type_name: &str,
) -> AnalysisResult<bool> {
    match plot_config {
        Some(config) if config.has_data() && config.valid_ranges() => {
            draw_line_chart(area, config)?;
            Ok(true)
        }
        Some(config) => {
            let reason = if !config.has_data() {
                "No data points"
            } else {
                "Invalid ranges"
            };
            draw_unavailable_message(area, plot_type_name, reason)?;
            Ok(false)
        }
        None => {
            draw_unavailable_message(area, plot_type_name, "No samples to plot")?;
            Ok(false)
        }
    }
}

/// Draws a text table without coordinate axes. The first row is styled as a header.
pub fn draw_table<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    cells: &[[String; 4]],
) -> AnalysisResult<()> {
    let (width, height) = area.dim_in_pixel();
    let row_height = (FONT_SIZE_TABLE as f64 * TABLE_ROW_HEIGHT_SCALE) as i32;
    let layout = table_cell_rects(
        width as i32,
        height as i32,
        cells.len(),
        &TABLE_COLUMN_WIDTHS,
        row_height,
    );
    let text_style = FONT_TUPLE_TABLE
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (row_idx, (row_rects, row_cells)) in layout.iter().zip(cells.iter()).enumerate() {
        for (&(top_left, bottom_right), text) in row_rects.iter().zip(row_cells.iter()) {
            if row_idx == 0 {
                area.draw(&Rectangle::new(
                    [top_left, bottom_right],
                    COLOR_TABLE_HEADER_FILL.filled(),
                ))?;
            }
            area.draw(&Rectangle::new(
                [top_left, bottom_right],
                COLOR_TABLE_BORDER.stroke_width(1),
            ))?;
            let center = (
                (top_left.0 + bottom_right.0) / 2,
                (top_left.1 + bottom_right.1) / 2,
            );
            area.draw(&Text::new(text.as_str(), center, text_style.clone()))?;
        }
    }
    Ok(())
}


// src/plot_framework.rs
