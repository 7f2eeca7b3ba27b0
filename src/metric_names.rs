//! Plotted path metrics
//!
//! Provides consistent titles, axis descriptions and artifact names for every
//! metric drawn against path length.

use crate::data_input::path_data::PathSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMetric {
    Curvature,
    ObstacleDistance,
    Theta,
    SteeringAngle,
}

/// All metrics in panel order.
pub const PLOT_METRICS: [PlotMetric; 4] = [
    PlotMetric::Curvature,
    PlotMetric::ObstacleDistance,
    PlotMetric::Theta,
    PlotMetric::SteeringAngle,
];

impl PlotMetric {
    /// Panel title in the composite figure.
    pub fn title(self) -> &'static str {
        match self {
            PlotMetric::Curvature => "Path Curvature Comparison",
            PlotMetric::ObstacleDistance => "Obstacle Distance Comparison",
            PlotMetric::Theta => "Heading Angle Comparison",
            PlotMetric::SteeringAngle => "Steering Angle Comparison",
        }
    }

    /// Title of the standalone detailed chart.
    pub fn detailed_title(self) -> String {
        format!("Detailed {}", self.title())
    }

    pub fn y_label(self) -> &'static str {
        match self {
            PlotMetric::Curvature => "Curvature",
            PlotMetric::ObstacleDistance => "Obstacle Distance",
            PlotMetric::Theta => "Heading Angle (rad)",
            PlotMetric::SteeringAngle => "Steering Angle (rad)",
        }
    }

    /// File name of the detailed chart.
    pub fn output_file(self) -> &'static str {
        match self {
            PlotMetric::Curvature => "curvature_comparison.png",
            PlotMetric::ObstacleDistance => "obstacle_distance_comparison.png",
            PlotMetric::Theta => "theta_comparison.png",
            PlotMetric::SteeringAngle => "steering_angle_comparison.png",
        }
    }

    /// Steering is undefined at a series' first sample, so its plots start at the second.
    pub fn skips_first_sample(self) -> bool {
        matches!(self, PlotMetric::SteeringAngle)
    }

    /// Reads the metric from a sample. `None` when the sample has no value for it.
    pub fn value(self, sample: &PathSample) -> Option<f64> {
        match self {
            PlotMetric::Curvature => Some(sample.curvature),
            PlotMetric::ObstacleDistance => Some(sample.obstacle_distance),
            PlotMetric::Theta => Some(sample.theta),
            PlotMetric::SteeringAngle => sample.steering_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::path_data::sample;

    #[test]
    fn test_metric_output_files() {
        let files: Vec<_> = PLOT_METRICS.iter().map(|m| m.output_file()).collect();
        assert_eq!(
            files,
            [
                "curvature_comparison.png",
                "obstacle_distance_comparison.png",
                "theta_comparison.png",
                "steering_angle_comparison.png",
            ]
        );
    }

    #[test]
    fn test_detailed_title() {
        assert_eq!(
            PlotMetric::Theta.detailed_title(),
            "Detailed Heading Angle Comparison"
        );
    }

    #[test]
    fn test_metric_values() {
        let mut s = sample(2.0, 0.25);
        assert_eq!(PlotMetric::Curvature.value(&s), Some(0.25));
        s.steering_angle = None;
        assert_eq!(PlotMetric::SteeringAngle.value(&s), None);
        assert!(PlotMetric::SteeringAngle.skips_first_sample());
        assert!(!PlotMetric::Theta.skips_first_sample());
    }
}
