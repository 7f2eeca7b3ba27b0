// src/plot_functions/plot_path_comparison.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Text;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{IntoFont, RGBColor};
use std::path::PathBuf;
use tracing::info;

use crate::analysis_context::AnalysisContext;
use crate::constants::{
    COLOR_OPTIMIZED_PATH, COLOR_ORIGINAL_PATH, COMPOSITE_GRID_COLS, COMPOSITE_GRID_ROWS,
    COMPOSITE_OUTPUT_FILE, COMPOSITE_PLOT_HEIGHT, COMPOSITE_PLOT_WIDTH, COMPOSITE_TITLE,
    LINE_WIDTH_PLOT, MAIN_TITLE_AREA_PX,
};
use crate::data_analysis::comparison_report::ComparisonReport;
use crate::data_input::path_data::{PathPair, PathSample, PathType};
use crate::error::AnalysisResult;
use crate::font_config::FONT_TUPLE_MAIN_TITLE;
use crate::metric_names::{PlotMetric, PLOT_METRICS};
use crate::plot_framework::{draw_chart_or_placeholder, draw_table, PlotConfig, PlotSeries};
use crate::types::TableCells;

pub const TRAJECTORY_TITLE: &str = "Path Trajectory Comparison";
pub const PATH_LENGTH_LABEL: &str = "Path Length";

/// Line colour for a path variant.
pub fn path_color(path_type: PathType) -> RGBColor {
    match path_type {
        PathType::Original => *COLOR_ORIGINAL_PATH,
        PathType::Optimized => *COLOR_OPTIMIZED_PATH,
    }
}

/// `(path_length, value)` line for one metric of one path.
///
/// Steering starts at the second sample; samples without a value are left out.
pub fn metric_series(
    samples: &[PathSample],
    path_type: PathType,
    metric: PlotMetric,
) -> PlotSeries {
    let skip = usize::from(metric.skips_first_sample());
    let data = samples
        .iter()
        .skip(skip)
        .filter_map(|s| metric.value(s).map(|v| (s.path_length, v)))
        .collect();
    PlotSeries {
        data,
        label: path_type.legend_label().to_string(),
        color: path_color(path_type),
        stroke_width: LINE_WIDTH_PLOT,
    }
}

/// Everything drawn in the composite figure, assembled before any drawing happens.
#[derive(Clone, Debug)]
pub struct CompositeFigure {
    pub title: String,
    pub trajectory: Option<PlotConfig>,
    /// One panel per metric, each over both paths' full extents.
    pub metric_panels: Vec<(PlotMetric, Option<PlotConfig>)>,
    pub table: TableCells,
}

/// Assembles the composite figure from both full series and the report.
pub fn build_composite_figure(pair: &PathPair, report: &ComparisonReport) -> CompositeFigure {
    let trajectory_series = [PathType::Original, PathType::Optimized]
        .into_iter()
        .map(|path_type| PlotSeries {
            data: pair.get(path_type).samples().iter().map(|s| (s.x, s.y)).collect(),
            label: path_type.legend_label().to_string(),
            color: path_color(path_type),
            stroke_width: LINE_WIDTH_PLOT,
        })
        .collect();
    let trajectory = PlotConfig::from_series(
        TRAJECTORY_TITLE,
        trajectory_series,
        "X Coordinate",
        "Y Coordinate",
        true,
    );

    let metric_panels = PLOT_METRICS
        .iter()
        .map(|&metric| {
            let series = [PathType::Original, PathType::Optimized]
                .into_iter()
                .map(|path_type| metric_series(pair.get(path_type).samples(), path_type, metric))
                .collect();
            let config = PlotConfig::from_series(
                metric.title(),
                series,
                PATH_LENGTH_LABEL,
                metric.y_label(),
                false,
            );
            (metric, config)
        })
        .collect();

    CompositeFigure {
        title: COMPOSITE_TITLE.to_string(),
        trajectory,
        metric_panels,
        table: report.table_cells(),
    }
}

/// Draws the composite figure into `root`: a title band, then a 2 x 3 grid of
/// trajectory, four metric panels and the report table.
pub fn draw_composite_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &CompositeFigure,
) -> AnalysisResult<()> {
    root.fill(&WHITE)?;
    let (title_area, grid_area) = root.split_vertically(MAIN_TITLE_AREA_PX as i32);
    let (title_width, title_height) = title_area.dim_in_pixel();
    title_area.draw(&Text::new(
        figure.title.as_str(),
        (title_width as i32 / 2, title_height as i32 / 2),
        FONT_TUPLE_MAIN_TITLE
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let panels = grid_area.split_evenly((COMPOSITE_GRID_ROWS, COMPOSITE_GRID_COLS));
    draw_chart_or_placeholder(&panels[0], figure.trajectory.as_ref(), "Trajectory")?;
    for (area, (metric, config)) in panels[1..].iter().zip(figure.metric_panels.iter()) {
        draw_chart_or_placeholder(area, config.as_ref(), metric.y_label())?;
    }
    // Summary table sits in the last cell, without axes.
    if let Some(table_area) = panels.last() {
        draw_table(table_area, &figure.table)?;
    }
    Ok(())
}

/// Renders the composite figure to `path_comparison.png` in the output directory.
pub fn plot_path_comparison(
    pair: &PathPair,
    report: &ComparisonReport,
    ctx: &AnalysisContext,
) -> AnalysisResult<PathBuf> {
    let output_file = ctx.output_path(COMPOSITE_OUTPUT_FILE);
    let figure = build_composite_figure(pair, report);

    {
        let root_area =
            BitMapBackend::new(&output_file, (COMPOSITE_PLOT_WIDTH, COMPOSITE_PLOT_HEIGHT))
                .into_drawing_area();
        draw_composite_figure(&root_area, &figure)?;
        root_area.present()?;
    }
    info!("  Composite plot saved as '{}'.", output_file.display());
    Ok(output_file)
}


// src/plot_functions/plot_path_comparison.rs
