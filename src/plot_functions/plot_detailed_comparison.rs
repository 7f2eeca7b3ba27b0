// src/plot_functions/plot_detailed_comparison.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::style::colors::WHITE;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::analysis_context::AnalysisContext;
use crate::constants::{DETAILED_PLOT_HEIGHT, DETAILED_PLOT_WIDTH};
use crate::data_analysis::alignment::AlignedView;
use crate::data_input::path_data::PathType;
use crate::error::AnalysisResult;
use crate::metric_names::{PlotMetric, PLOT_METRICS};
use crate::plot_framework::{draw_chart_or_placeholder, PlotConfig};
use crate::plot_functions::plot_path_comparison::{metric_series, PATH_LENGTH_LABEL};

/// One standalone chart comparing a metric over the common path-length domain.
#[derive(Clone, Debug)]
pub struct DetailedChart {
    pub metric: PlotMetric,
    pub output_file: &'static str,
    pub config: Option<PlotConfig>,
}

/// Assembles the four detailed charts from the aligned samples only.
pub fn build_detailed_charts(view: &AlignedView<'_>) -> Vec<DetailedChart> {
    PLOT_METRICS
        .iter()
        .map(|&metric| {
            let series = [PathType::Original, PathType::Optimized]
                .into_iter()
                .map(|path_type| metric_series(view.samples(path_type), path_type, metric))
                .collect();
            DetailedChart {
                metric,
                output_file: metric.output_file(),
                config: PlotConfig::from_series(
                    metric.detailed_title(),
                    series,
                    PATH_LENGTH_LABEL,
                    metric.y_label(),
                    false,
                ),
            }
        })
        .collect()
}

/// Draws one detailed chart into `root`. Returns whether a chart (not a placeholder) was drawn.
pub fn draw_detailed_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &DetailedChart,
) -> AnalysisResult<bool> {
    root.fill(&WHITE)?;
    draw_chart_or_placeholder(root, chart.config.as_ref(), chart.metric.y_label())
}

/// Renders the four detailed charts into the output directory.
///
/// Fails with `EmptyAlignedDomain` before drawing anything when the two paths share no
/// path-length range.
pub fn plot_detailed_comparisons(
    view: &AlignedView<'_>,
    ctx: &AnalysisContext,
) -> AnalysisResult<Vec<PathBuf>> {
    view.require_non_empty()?;
    info!("Plotting detailed charts over path_length <= {:.3}", view.limit());

    let mut written = Vec::with_capacity(PLOT_METRICS.len());
    for chart in build_detailed_charts(view) {
        let output_file = ctx.output_path(chart.output_file);
        let drawn = {
            let root_area =
                BitMapBackend::new(&output_file, (DETAILED_PLOT_WIDTH, DETAILED_PLOT_HEIGHT))
                    .into_drawing_area();
            let drawn = draw_detailed_chart(&root_area, &chart)?;
            root_area.present()?;
            drawn
        };
        if drawn {
            info!("  Detailed plot saved as '{}'.", output_file.display());
        } else {
            warn!(
                "  Detailed plot '{}' saved with a placeholder: no {} samples in common.",
                output_file.display(),
                chart.metric.y_label()
            );
        }
        written.push(output_file);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::alignment::align;
    use crate::data_input::path_data::{sample, PathPair, PathSeries};
    use crate::error::AnalysisError;

    fn series(path_type: PathType, points: &[(f64, f64)]) -> PathSeries {
        PathSeries::new(path_type, points.iter().map(|&(l, c)| sample(l, c)).collect()).unwrap()
    }

    #[test]
    fn test_detailed_charts_use_aligned_domain() {
        let pair = PathPair::new(
            series(PathType::Original, &[(0.0, 0.1), (5.0, 0.2)]),
            series(PathType::Optimized, &[(0.0, 0.05), (5.0, 0.1), (6.0, 0.1)]),
        );
        let view = align(&pair);
        let charts = build_detailed_charts(&view);
        assert_eq!(charts.len(), 4);

        let curvature = charts[0].config.as_ref().unwrap();
        assert_eq!(charts[0].output_file, "curvature_comparison.png");
        assert_eq!(curvature.title, "Detailed Path Curvature Comparison");
        assert_eq!(curvature.x_range.end, 5.0);
        assert!(curvature
            .series
            .iter()
            .all(|s| s.data.iter().all(|&(x, _)| x <= 5.0)));
        assert_eq!(curvature.series[1].data, vec![(0.0, 0.05), (5.0, 0.1)]);

        let steering = charts[3].config.as_ref().unwrap();
        assert_eq!(steering.series[0].data.len(), 1);
        assert_eq!(steering.series[1].data.len(), 1);
    }

    #[test]
    fn test_single_sample_overlap_has_no_steering_chart() {
        let pair = PathPair::new(
            series(PathType::Original, &[(0.0, 0.1)]),
            series(PathType::Optimized, &[(0.0, 0.1), (1.0, 0.1)]),
        );
        let view = align(&pair);
        let charts = build_detailed_charts(&view);
        assert!(charts[0].config.is_some());
        assert!(charts[3].config.is_none());
    }

    #[test]
    fn test_draw_detailed_chart_into_buffer() {
        let pair = PathPair::new(
            series(PathType::Original, &[(0.0, 0.1), (5.0, 0.2)]),
            series(PathType::Optimized, &[(0.0, 0.05), (5.0, 0.1), (6.0, 0.1)]),
        );
        let view = align(&pair);
        let charts = build_detailed_charts(&view);
        let (width, height) = (DETAILED_PLOT_WIDTH, DETAILED_PLOT_HEIGHT);
        for chart in &charts {
            let mut buffer = vec![0u8; (width * height * 3) as usize];
            let drawn = {
                let root_area =
                    BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
                let drawn = draw_detailed_chart(&root_area, chart).unwrap();
                root_area.present().unwrap();
                drawn
            };
            assert!(drawn, "{:?} fell back to a placeholder", chart.metric);
            assert!(buffer.iter().any(|&b| b != 255));
        }
    }

    #[test]
    fn test_placeholder_drawn_without_samples() {
        let chart = DetailedChart {
            metric: PlotMetric::SteeringAngle,
            output_file: PlotMetric::SteeringAngle.output_file(),
            config: None,
        };
        let mut buffer = vec![0u8; 400 * 300 * 3];
        let drawn = {
            let root_area = BitMapBackend::with_buffer(&mut buffer, (400, 300)).into_drawing_area();
            draw_detailed_chart(&root_area, &chart).unwrap()
        };
        assert!(!drawn);
    }

    #[test]
    fn test_empty_domain_is_signalled_before_rendering() {
        let pair = PathPair::new(
            series(PathType::Original, &[(2.0, 0.1), (3.0, 0.1)]),
            series(PathType::Optimized, &[(0.0, 0.1), (1.0, 0.1)]),
        );
        let view = align(&pair);
        let ctx = AnalysisContext::new(PathBuf::from("/nonexistent/dir/input.csv"), None);
        assert!(matches!(
            plot_detailed_comparisons(&view, &ctx),
            Err(AnalysisError::EmptyAlignedDomain { .. })
        ));
    }
}

// src/plot_functions/plot_detailed_comparison.rs
